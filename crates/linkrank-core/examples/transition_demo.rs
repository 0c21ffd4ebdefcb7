//! Print the transition model of a small four-page corpus
//!
//! Run with `cargo run -p linkrank-core --example transition_demo`.

use linkrank_core::{transition, LinkGraph};

fn main() -> linkrank_core::Result<()> {
    let corpus = LinkGraph::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["3.html", "1.html"]),
        ("3.html", vec!["4.html", "2.html"]),
        ("4.html", vec!["2.html"]),
    ]);

    let page = "3.html";
    let distribution = transition(&corpus, &page, 0.85)?;

    println!("Next page from {}:", page);
    for (next, probability) in distribution.iter() {
        println!("  {}: {:.4}", next, probability);
    }

    Ok(())
}
