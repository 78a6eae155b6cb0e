//! Interactive reachability query session.
//!
//! Reads origin/destination pairs line by line, answers each with one
//! result line, and re-prompts on malformed input or unknown names. The
//! loop is generic over its reader and writer so tests can drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use causeway_graph::{GraphStore, is_reachable};
use tracing::debug;

use crate::error::Result;
use crate::output;

/// Prompt shown before each query unless overridden by configuration.
pub const DEFAULT_PROMPT: &str = "Enter origin and destination (quit to exit): ";

/// The literal input token that ends the session.
const QUIT_TOKEN: &str = "quit";

/// Run the query loop until `quit` or end of input.
///
/// Malformed lines and unknown names are recoverable: the session prints a
/// hint and re-prompts. Tokens beyond the first two are ignored.
///
/// # Errors
///
/// Returns an error only when reading or writing fails; "no path" is a
/// normal answer, not an error.
pub fn run<R, W>(store: &mut GraphStore, mut input: R, mut out: W, prompt: &str) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: leave without the quit farewell.
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed == QUIT_TOKEN {
            writeln!(out, "Normal exit.")?;
            return Ok(());
        }

        let mut tokens = trimmed.split_whitespace();
        let (Some(origin), Some(destination)) = (tokens.next(), tokens.next()) else {
            writeln!(
                out,
                "You need to input both origin and destination nodes. Try again."
            )?;
            writeln!(out)?;
            continue;
        };

        let (Some(src), Some(dest)) = (store.find_node(origin), store.find_node(destination))
        else {
            writeln!(out, "One or both nodes do not exist. Try again.")?;
            writeln!(out)?;
            continue;
        };

        debug!(origin, destination, "running reachability query");
        let reachable = is_reachable(store, src, dest);
        output::write_query_result(&mut out, origin, destination, reachable)?;
        writeln!(out)?;
    }
}
