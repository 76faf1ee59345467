use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use nexo_client::{api::Comment, build_comment_tree, excerpt, strip_markdown, CommentNode};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Show a comment dump as reply threads
    Tree {
        /// JSON array of comments, or - for stdin
        input: PathBuf,

        /// Print the threads as JSON instead of text
        #[structopt(long)]
        json: bool,
    },

    /// Strip Markdown read from stdin
    Strip {
        /// Cut the result to this many characters
        #[structopt(long)]
        excerpt: Option<usize>,
    },
}

/// Deepest reply level `tree --json` prints. Serializing recurses once per
/// level, and serde_json reads back at most 128 nested values, two per level.
const MAX_JSON_DEPTH: usize = 60;

fn check_json_depth(forest: &[CommentNode]) -> anyhow::Result<()> {
    let depth = CommentNode::max_depth(forest);
    if depth > MAX_JSON_DEPTH {
        anyhow::bail!(
            "threads nest {} replies deep, --json supports at most {}",
            depth,
            MAX_JSON_DEPTH
        );
    }
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut res = String::new();
        io::stdin()
            .read_to_string(&mut res)
            .context("reading stdin")?;
        Ok(res)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {:?}", input))
    }
}

fn write_threads(out: &mut impl Write, forest: &[CommentNode]) -> io::Result<()> {
    for (depth, node) in CommentNode::depth_first(forest) {
        let c = &node.comment;
        let text = c.text.lines().next().unwrap_or("");
        writeln!(
            out,
            "{:indent$}{} ({}, {} likes): {}",
            "",
            c.author_display_name,
            c.created_at.format("%Y-%m-%d %H:%M:%S%.3f"),
            c.like_count(),
            text,
            indent = 4 * depth,
        )?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opt.cmd {
        Command::Tree { input, json } => {
            let comments: Vec<Comment> = serde_json::from_str(&read_input(&input)?)
                .with_context(|| format!("parsing comments from {:?}", input))?;
            let forest = build_comment_tree(&comments);
            tracing::info!(
                num_comments = comments.len(),
                num_threads = forest.len(),
                "built comment threads"
            );
            if json {
                check_json_depth(&forest)?;
                serde_json::to_writer_pretty(&mut out, &forest).context("serializing threads")?;
                writeln!(out)?;
            } else {
                write_threads(&mut out, &forest).context("writing threads")?;
            }
        }
        Command::Strip { excerpt: max_chars } => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("reading stdin")?;
            let text = match max_chars {
                Some(n) => excerpt(&markdown as &str, n),
                None => strip_markdown(&markdown as &str),
            };
            writeln!(out, "{}", text)?;
        }
    }

    Ok(())
}
