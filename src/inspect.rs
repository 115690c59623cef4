use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;
use wordtree::{LoadReport, PrefixTree};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(name = "WORD", required = true)]
    words: Vec<String>,
    /// Print a JSON object of word to found flag.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Stats {
    #[serde(flatten)]
    load: LoadReport,
    words: usize,
    nodes: usize,
}

pub fn execute_check(tree: &PrefixTree, args: CheckArgs) -> anyhow::Result<()> {
    if args.json {
        let found: BTreeMap<&str, bool> = args
            .words
            .iter()
            .map(|w| (w.as_str(), tree.contains(w)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for word in &args.words {
            println!("{}", check_line(tree, word));
        }
    }
    Ok(())
}

fn check_line(tree: &PrefixTree, word: &str) -> String {
    let status = if tree.contains(word) {
        "found"
    } else {
        "missing"
    };
    format!("{}: {}", word, status)
}

pub fn execute_stats(
    tree: &PrefixTree,
    report: &LoadReport,
    args: StatsArgs,
) -> anyhow::Result<()> {
    let stats = Stats {
        load: *report,
        words: tree.word_count(),
        nodes: tree.node_count(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("lines:      {}", stats.load.lines);
        println!("inserted:   {}", stats.load.inserted);
        println!("duplicates: {}", stats.load.duplicates);
        println!("skipped:    {}", stats.load.skipped);
        println!("words:      {}", stats.words);
        println!("nodes:      {}", stats.nodes);
    }
    Ok(())
}

pub fn execute_dump(tree: &PrefixTree) {
    print!("{}", tree.render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_line() {
        let tree: PrefixTree = ["Hello"].into_iter().collect();
        assert_eq!(check_line(&tree, "hello"), "hello: found");
        assert_eq!(check_line(&tree, "HELLO"), "HELLO: found");
        assert_eq!(check_line(&tree, "hell"), "hell: missing");
        assert_eq!(check_line(&tree, "hello!"), "hello!: missing");
    }

    #[test]
    fn test_stats_json() {
        let tree: PrefixTree = ["ab", "ac"].into_iter().collect();
        let stats = Stats {
            load: LoadReport {
                lines: 3,
                inserted: 2,
                duplicates: 0,
                skipped: 1,
            },
            words: tree.word_count(),
            nodes: tree.node_count(),
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "lines": 3,
                "inserted": 2,
                "duplicates": 0,
                "skipped": 1,
                "words": 2,
                "nodes": 4,
            })
        );
    }
}
