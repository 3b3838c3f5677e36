// cli/src/main.rs
//
// Interactive terminal demo for the candidate engine. Each input line is
// a query; the current candidate page is printed with selection indices.
// `<` and `>` page through the last result, `=N` picks the N-th candidate
// on the current page and boosts its key for future queries.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

use pinmatch_core::{CandidateList, Config, Dictionary, Engine};

#[derive(Parser)]
#[command(name = "pinmatch", version, about = "Fuzzy pinyin candidate matching demo")]
struct Cli {
    /// JSON character dictionary ({"ni": ["你", "尼"], ...})
    #[arg(long)]
    chars: Option<std::path::PathBuf>,

    /// JSON phrase dictionary ({"nihao": ["你好"], ...})
    #[arg(long)]
    phrases: Option<std::path::PathBuf>,

    /// TOML engine configuration
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Candidates shown per page
    #[arg(long)]
    page_size: Option<usize>,
}

/// Small built-in dictionaries so the demo works without any files.
fn demo_dictionaries() -> (Dictionary, Dictionary) {
    let chars: Dictionary = [
        ("ni", "你"),
        ("ni", "尼"),
        ("hao", "好"),
        ("hao", "号"),
        ("wo", "我"),
        ("zhong", "中"),
        ("guo", "国"),
        ("ma", "吗"),
        ("de", "的"),
        ("shi", "是"),
    ]
    .into_iter()
    .collect();

    let phrases: Dictionary = [
        ("nihao", "你好"),
        ("nihaoma", "你好吗"),
        ("zhongguo", "中国"),
        ("woshi", "我是"),
        ("haode", "好的"),
    ]
    .into_iter()
    .collect();

    (chars, phrases)
}

fn build_engine(cli: &Cli) -> Result<Engine> {
    let mut config = match &cli.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size.max(1);
    }

    let engine = match (&cli.chars, &cli.phrases) {
        (Some(chars_path), phrases_path) => {
            let chars = Dictionary::load_json(chars_path)?;
            println!("loaded {} character keys", chars.len());
            let mut engine = Engine::new(chars, config);
            if let Some(path) = phrases_path {
                let phrases = Dictionary::load_json(path)?;
                println!("loaded {} phrase keys", phrases.len());
                engine = engine.with_phrases(phrases);
            }
            engine
        }
        (None, _) => {
            println!("no dictionary given, using built-in demo entries");
            let (chars, phrases) = demo_dictionaries();
            Engine::new(chars, config).with_phrases(phrases)
        }
    };
    Ok(engine)
}

fn print_page(list: &CandidateList) {
    if list.is_empty() {
        println!("  (no candidates)");
        return;
    }
    let indexed: Vec<String> = list
        .page_tokens()
        .iter()
        .enumerate()
        .map(|(i, tok)| format!("{}.{}", i + 1, tok))
        .collect();
    println!(
        "  {}   [page {}/{}]",
        indexed.join("  "),
        list.current_page() + 1,
        list.num_pages()
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut engine = build_engine(&cli)?;
    let mut list = CandidateList::with_page_size(engine.config().page_size);
    let mut last_query = String::new();

    println!("Type pinyin and press Enter (e.g. nihao, nh, zg).");
    println!("Commands: <  previous page, > next page, =N select, Ctrl+D quits.");
    println!();

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "" => {}
            "<" => {
                list.page_up();
                print_page(&list);
            }
            ">" => {
                list.page_down();
                print_page(&list);
            }
            _ if input.starts_with('=') => {
                match input[1..].parse::<usize>() {
                    Ok(n) if n >= 1 => match list.select_by_index(n - 1) {
                        Some(token) => {
                            println!("  committed: {token}");
                            // Favor the committed key next time.
                            if !last_query.is_empty() {
                                engine.boost(&last_query, 1);
                            }
                        }
                        None => println!("  no candidate {n} on this page"),
                    },
                    _ => println!("  usage: =N with N >= 1"),
                }
            }
            query => {
                last_query = query.to_string();
                list.set_tokens(engine.lookup(query));
                print_page(&list);
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
