//! Command-line demo for `bst_sort`.
//!
//! Builds the sample tree, walks it every which way, removes a leaf, a node
//! with one child, a node with two children and the root, then corrupts the
//! tree to show what the local validity check does and doesn't catch. The sort
//! demo runs every algorithm over the same array.

use anyhow::Result;
use bst_sort::sort::{self, SAMPLE};
use bst_sort::tree::{Node, Tree, Value};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const RULE: &str = "--------------------------------";

/// Added under the root of the demo tree, in this order.
const DEMO_VALUES: [Value; 10] = [30, 70, 20, 40, 60, 80, 10, 25, 35, 45];

#[derive(Parser)]
#[command(name = "bst_sort")]
#[command(about = "Binary search tree and sorting algorithm demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree, walk it, remove from it and check it
    Tree {
        /// Value of the root node
        #[arg(long, default_value_t = 50)]
        root: Value,

        /// Values added under the root, in order
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = DEMO_VALUES)]
        values: Vec<Value>,
    },

    /// Run every sorting algorithm over the same array
    Sort {
        /// Seed for quicksort's pivot choices; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Values to sort instead of the built-in sample
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Option<Vec<i64>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Tree { root, values }) => tree_demo(root, &values)?,
        Some(Commands::Sort { seed, values }) => {
            sort_demo(seed, values.as_deref().unwrap_or(&SAMPLE));
        }
        None => {
            tree_demo(50, &DEMO_VALUES)?;
            println!();
            sort_demo(None, &SAMPLE);
        }
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the demo output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn join(values: impl Iterator<Item = Value>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}

fn show(values: &[i64]) -> String {
    format!("{:?}", values)
}

fn tree_demo(root: Value, values: &[Value]) -> Result<()> {
    let mut tree = Tree::from(Node::new(root));
    tree.extend(values.iter().copied());

    println!("Initial tree:");
    println!("{}", RULE);
    println!("Pre-order (root, left, right):  {}", join(tree.pre_order()));
    println!("In-order (left, root, right):   {}", join(tree.in_order()));
    println!("Post-order (left, right, root): {}", join(tree.post_order()));
    println!("Level order:                    {}", join(tree.levels()));
    println!("{}", RULE);

    println!("Height: {}", tree.height());
    println!("Min: {}", tree.min()?);
    println!("Max: {}", tree.max()?);
    println!("Search 40: {}", tree.search(40));
    println!("Search 99: {}", tree.search(99));
    println!("{}", RULE);

    for (value, kind) in [
        (10, "leaf"),
        (20, "one child"),
        (30, "two children"),
        (root, "the root"),
    ] {
        println!();
        println!("Removing {} ({})...", value, kind);
        tree.remove(value);
        println!("In-order after removing {}: {}", value, join(tree.in_order()));
    }

    match tree.root() {
        Some(node) => println!("New root: {}", node.value()),
        None => println!("The tree is now empty"),
    }
    println!("{}", RULE);
    println!("Size: {}", tree.size());
    println!("{}", RULE);
    println!("Even values: {}", tree.par());
    println!("{}", RULE);

    println!("Is the tree a BST? {}", tree.is_bst());
    println!("Corrupting the tree: root.left.right = 99");
    if let Some(node) = tree
        .root_mut()
        .and_then(Node::left_mut)
        .and_then(Node::right_mut)
    {
        node.set_value(99);
    }
    println!("Is the corrupted tree a BST? {}", tree.is_bst());

    Ok(())
}

fn sort_demo(seed: Option<u64>, data: &[i64]) {
    let seed = seed.unwrap_or_else(|| StdRng::from_entropy().next_u64());
    debug!(seed, "seeding quicksort");
    let mut rng = StdRng::seed_from_u64(seed);

    println!("Unsorted:               {}", show(data));

    match sort::counting_sort(data) {
        Ok(sorted) => println!("Sorted (counting):      {}", show(&sorted)),
        Err(err) => println!("Sorted (counting):      skipped, {}", err),
    }

    let mut quick = data.to_vec();
    sort::quick_sort(&mut quick, &mut rng);
    println!("Sorted (quick):         {}", show(&quick));

    println!("Sorted (merge):         {}", show(&sort::merge_sort(data)));

    let mut insertion = data.to_vec();
    sort::insertion_sort(&mut insertion);
    println!("Sorted (insertion):     {}", show(&insertion));

    let mut bubble = data.to_vec();
    let stats = sort::bubble_sort(&mut bubble);
    println!(
        "Sorted (bubble):        {} in {} passes, {} swaps",
        show(&bubble),
        stats.passes,
        stats.swaps
    );

    let mut selection = data.to_vec();
    sort::selection_sort(&mut selection);
    println!("Sorted (selection):     {}", show(&selection));
}
