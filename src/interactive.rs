use std::io::Write;

use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use wordtree::session::{prediction_rows, DEFAULT_TERMINAL_ROWS};
use wordtree::{PrefixTree, Session};

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Terminal height in rows. Falls back to `LINES`, then 24.
    #[arg(long)]
    rows: Option<usize>,
}

fn terminal_rows(flag: Option<usize>, lines_env: Option<&str>) -> usize {
    flag.or_else(|| lines_env.and_then(|v| v.trim().parse().ok()))
        .unwrap_or(DEFAULT_TERMINAL_ROWS)
}

/// Reads stdin a line at a time. Each line is taken as the full input so far
/// and the predictions for its last word are printed below it.
pub async fn execute_interactive(tree: &PrefixTree, args: InteractiveArgs) -> anyhow::Result<()> {
    let lines_env = std::env::var("LINES").ok();
    let rows = prediction_rows(terminal_rows(args.rows, lines_env.as_deref()));
    info!("Interactive session with room for {} predictions", rows);

    let input = BufReader::new(tokio::io::stdin());
    run_session(tree, rows, input, &mut std::io::stdout()).await
}

async fn run_session<R, W>(
    tree: &PrefixTree,
    rows: usize,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        session.set_input(line.trim_end_matches('\r'));
        debug!("Fragment: {:?}", session.fragment());

        write!(out, "{}", session.render(tree, rows))?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_rows() {
        assert_eq!(terminal_rows(Some(10), Some("50")), 10);
        assert_eq!(terminal_rows(None, Some("50")), 50);
        assert_eq!(terminal_rows(None, Some(" 40\n")), 40);
        assert_eq!(terminal_rows(None, Some("tall")), DEFAULT_TERMINAL_ROWS);
        assert_eq!(terminal_rows(None, None), DEFAULT_TERMINAL_ROWS);
    }

    #[tokio::test]
    async fn test_each_line_completes_its_last_word() {
        let tree: PrefixTree = ["the", "then", "there", "cat", "cats"].into_iter().collect();
        let input: &[u8] = b"the\r\nthe ca\nthe \n";
        let mut out = Vec::new();

        run_session(&tree, 5, input, &mut out).await.unwrap();

        let expected = concat!(
            "the\n\n--- prediction ---\n  then\n  there\n",
            "the ca\n\n--- prediction ---\n  cat\n  cats\n",
            "the \n\n--- prediction ---\n",
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_rows_cap_predictions() {
        let tree: PrefixTree = ["ab", "ac", "ad"].into_iter().collect();
        let input: &[u8] = b"a\n";
        let mut out = Vec::new();

        run_session(&tree, 1, input, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a\n\n--- prediction ---\n  ab\n"
        );
    }

    #[tokio::test]
    async fn test_empty_input() {
        let tree = PrefixTree::new();
        let input: &[u8] = b"";
        let mut out = Vec::new();

        run_session(&tree, 5, input, &mut out).await.unwrap();
        assert!(out.is_empty());
    }
}
