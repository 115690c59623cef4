use std::io::Write;

use clap::Args;
use tracing::debug;
use wordtree::PrefixTree;

#[derive(Args, Debug)]
pub struct CompleteArgs {
    #[arg(name = "PREFIX")]
    prefix: String,
    /// Maximum number of completions.
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,
    /// Print a JSON array instead of one word per line.
    #[arg(long)]
    json: bool,
}

pub fn execute_complete(tree: &PrefixTree, args: CompleteArgs) -> anyhow::Result<()> {
    let completions = tree.complete(&args.prefix, args.limit);
    debug!(
        "{} completions for {:?} (limit {})",
        completions.len(),
        args.prefix,
        args.limit
    );

    let mut stdout = std::io::stdout().lock();
    write_completions(&mut stdout, &completions, args.json)?;
    stdout.flush()?;

    Ok(())
}

fn write_completions<W: Write>(
    out: &mut W,
    completions: &[String],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(completions)?)?;
    } else {
        for word in completions {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}
