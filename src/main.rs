use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use treepath::{Tree, TreeIndex};

#[derive(Parser, Debug)]
#[command(
    name = "treepath",
    about = "Explore path addressing and common-subtree queries on a sample tree"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sample tree as an indented outline.
    Show,
    /// Print the value at an index (e.g. `1.2.2`, `0` for the root).
    Get {
        index: TreeIndex,
    },
    /// Print the values of all leaves, left to right.
    Leaves,
    /// Print the values of the children of the node at an index.
    Children {
        index: TreeIndex,
    },
    /// Print every node holding a value, with its index.
    Find {
        value: i64,
    },
    /// Print the deepest subtrees holding all of the given values.
    Common {
        #[arg(required = true)]
        values: Vec<i64>,
    },
    /// Walk up from an index to the first subtree holding a value.
    Ancestor {
        from: TreeIndex,
        value: i64,
    },
    /// Detach the subtree at an index and print both halves.
    Remove {
        index: TreeIndex,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut tree = sample_tree();
    debug!(nodes = tree.node_count(), height = tree.height(), "built sample tree");

    match cli.command {
        Commands::Show => print!("{tree}"),
        Commands::Get { index } => {
            let value = tree
                .get(&index)
                .with_context(|| format!("failed to resolve index {index}"))?;
            println!("{value}");
        }
        Commands::Leaves => println!("{}", join(tree.leaves())),
        Commands::Children { index } => {
            let values = tree
                .child_values(&index)
                .with_context(|| format!("failed to resolve index {index}"))?;
            println!("{}", join(values));
        }
        Commands::Find { value } => {
            for found in tree.find(&value) {
                println!("{found}");
            }
        }
        Commands::Common { values } => run_common(&tree, &values),
        Commands::Ancestor { from, value } => {
            let found = tree
                .first_common_ancestor(&from, &value)
                .with_context(|| format!("failed to resolve starting index {from}"))?;
            match found {
                Some(found) => println!("{} {}", found.index, found.tree.value()),
                None => println!("No subtree above {from} holds {value}."),
            }
        }
        Commands::Remove { index } => {
            let removed = tree
                .remove_subtree(&index)
                .with_context(|| format!("failed to remove subtree {index}"))?;
            info!(%index, removed = removed.node_count(), "detached subtree");
            print!("{tree}");
            println!("--");
            print!("{removed}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_common(tree: &Tree<i64>, values: &[i64]) {
    let found = tree.smallest_common_subtrees(values);
    if found.is_empty() {
        println!("No subtree holds all of {}.", join(values.iter()));
        return;
    }
    for subtree in found {
        println!("{} {}", subtree.index, subtree.tree.value());
    }
}

fn join<'a>(values: impl IntoIterator<Item = &'a i64>) -> String {
    values
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two levels of binary fan-out under a root, numbered depth-first
/// by subtree: `0 → [1 → [2 → [4, 5], 3 → [6, 7]], 8 → [9 → [11, 12], 10 → [13, 14]]]`.
fn sample_tree() -> Tree<i64> {
    Tree::new(0)
        .with_subtree(
            Tree::new(1)
                .with_subtree(Tree::new(2).with_child(4).with_child(5))
                .with_subtree(Tree::new(3).with_child(6).with_child(7)),
        )
        .with_subtree(
            Tree::new(8)
                .with_subtree(Tree::new(9).with_child(11).with_child(12))
                .with_subtree(Tree::new(10).with_child(13).with_child(14)),
        )
}
