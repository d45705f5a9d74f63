use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bingo::{
    completed_lines, generate, init_logging, parse_card, render_all, render_card, slug,
    BingoFile, Caller, Card, CardSet, GenerationMode, GridSpec, Pool, DEFAULT_FREE_TEXT,
    DEFAULT_TITLE,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    /// Printable HTML files.
    Html,
    /// Custom .bingo JSON files for playing.
    Bingo,
    /// Both formats side by side.
    Both,
}

#[derive(Parser)]
enum Commands {
    /// Generate a set of cards from an item list (one item per line).
    Generate {
        /// Text file with one pool item per line.
        items: PathBuf,
        #[arg(long, default_value_t = 5)]
        size: usize,
        #[arg(long, default_value_t = 5)]
        cards: usize,
        #[arg(long, default_value = DEFAULT_FREE_TEXT)]
        free_text: String,
        #[arg(long)]
        title: Option<String>,
        /// Use the 75-ball B-I-N-G-O column layout when the pool allows it.
        #[arg(long)]
        traditional: bool,
        #[arg(long, value_enum, default_value = "bingo")]
        format: OutputFormat,
        #[arg(long, default_value = ".")]
        out: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible cards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play a card interactively from a .bingo or exported .html file.
    Play {
        file: PathBuf,
        /// Card number to play when the file holds several.
        #[arg(long)]
        card: Option<usize>,
    },
    /// Run the caller: draw items without replacement from a .bingo file.
    Call {
        file: PathBuf,
        #[arg(long, help = "Fix RNG seed for a reproducible draw order")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            items,
            size,
            cards,
            free_text,
            title,
            traditional,
            format,
            out,
            seed,
        } => {
            let mut rng = make_rng(seed);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (cards will be reproducible)", s);
            }
            let raw = fs::read_to_string(&items)
                .with_context(|| format!("reading item list {}", items.display()))?;
            let pool = Pool::new(
                raw.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from),
                &free_text,
            );
            let grid = GridSpec::new(size)?;
            let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
            let mode = if traditional {
                GenerationMode::Traditional
            } else {
                GenerationMode::RandomPool
            };
            let set = generate(&pool, grid, &free_text, &title, cards, mode, &mut rng)?;
            write_outputs(&set, &pool, &format, &out)?;
        }
        Commands::Play { file, card } => {
            let card = load_playable_card(&file, card)?;
            play_loop(card)?;
        }
        Commands::Call { file, seed } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let bingo = BingoFile::parse(&raw)?;
            let caller = Caller::load(bingo.caller_list()?);
            call_loop(caller, make_rng(seed))?;
        }
    }
    Ok(())
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn write_outputs(
    set: &CardSet,
    pool: &Pool,
    format: &OutputFormat,
    out: &Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(out)?;
    let base = slug(&set.title);
    if matches!(format, OutputFormat::Bingo | OutputFormat::Both) {
        let path = out.join(format!("{base}.bingo"));
        fs::write(&path, BingoFile::for_set(set, pool).to_json()?)?;
        println!("Wrote {}", path.display());
        if set.cards.len() > 1 {
            for card in &set.cards {
                let path = out.join(format!("{base}-{}.bingo", card.card_number()));
                fs::write(&path, BingoFile::for_card(set, pool, card).to_json()?)?;
                println!("Wrote {}", path.display());
            }
        }
    }
    if matches!(format, OutputFormat::Html | OutputFormat::Both) {
        let path = out.join(format!("{base}-all-cards.html"));
        fs::write(&path, render_all(set))?;
        println!("Wrote {}", path.display());
        for card in &set.cards {
            let path = out.join(format!("{base}-{}.html", card.card_number()));
            fs::write(&path, render_card(set, card))?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn load_playable_card(file: &Path, requested: Option<usize>) -> anyhow::Result<Card> {
    let raw = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let is_html = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
    if is_html {
        return Ok(parse_card(&raw)?);
    }
    let bingo = BingoFile::parse(&raw)?;
    let title = bingo.metadata.title.clone();
    let mut cards = bingo.into_cards()?;
    println!("Playing: {title}");
    if cards.len() > 1 {
        let number = match requested {
            Some(n) => n,
            None => {
                let available: Vec<usize> = cards.iter().map(Card::card_number).collect();
                println!("File holds {} cards: {:?}", cards.len(), available);
                prompt("Card number to play: ")?
                    .trim()
                    .parse()
                    .context("expected a card number")?
            }
        };
        cards
            .into_iter()
            .find(|c| c.card_number() == number)
            .with_context(|| format!("no card #{number} in file"))
    } else {
        Ok(cards.remove(0))
    }
}

fn play_loop(mut card: Card) -> anyhow::Result<()> {
    println!("Commands: toggle <row> <col> (1-based), lines, reset, quit");
    loop {
        print_card(&card);
        report_lines(&card);
        let input = prompt("> ")?;
        let mut words = input.split_whitespace();
        match words.next() {
            Some("toggle") | Some("t") => {
                let (row, col) = match (words.next(), words.next()) {
                    (Some(r), Some(c)) => match (r.parse::<usize>(), c.parse::<usize>()) {
                        (Ok(r), Ok(c)) if r >= 1 && c >= 1 => (r - 1, c - 1),
                        _ => {
                            println!("Usage: toggle <row> <col> with 1-based numbers");
                            continue;
                        }
                    },
                    _ => {
                        println!("Usage: toggle <row> <col>");
                        continue;
                    }
                };
                let grid = card.grid();
                if row >= grid.size() || col >= grid.size() {
                    println!("Out of range for a {0}x{0} card", grid.size());
                    continue;
                }
                if !card.toggle(grid.index(row, col)) {
                    println!("The center free cell stays checked");
                }
            }
            Some("lines") | Some("l") => {}
            Some("reset") | Some("r") => card.reset(),
            Some("quit") | Some("q") | None => break,
            Some(other) => println!("Unknown command: {other}"),
        }
    }
    Ok(())
}

fn call_loop(mut caller: Caller, mut rng: SmallRng) -> anyhow::Result<()> {
    println!(
        "Loaded {} items. Commands: draw (or enter), list, reset, quit",
        caller.remaining().len()
    );
    loop {
        let input = prompt("caller> ")?;
        match input.trim() {
            "" | "draw" | "d" => match caller.draw(&mut rng) {
                Some(item) => println!(
                    "Drew: {item}  ({} remaining)",
                    caller.remaining().len()
                ),
                None => println!("Nothing left to draw; use reset to start over"),
            },
            "list" | "l" => {
                println!("Drawn so far (most recent first): {:?}", caller.drawn());
                println!("Remaining: {}", caller.remaining().len());
            }
            "reset" | "r" => {
                caller.reset();
                println!("Reset; {} items remaining", caller.remaining().len());
            }
            "quit" | "q" => break,
            other => println!("Unknown command: {other}"),
        }
    }
    Ok(())
}

fn print_card(card: &Card) {
    let size = card.grid().size();
    let width = card
        .cells()
        .iter()
        .map(|c| c.content.chars().count())
        .max()
        .unwrap_or(1)
        .max(3);
    for row in 0..size {
        for col in 0..size {
            let cell = &card.cells()[card.grid().index(row, col)];
            let mark = if cell.checked { "*" } else { " " };
            print!("[{mark}{:<width$}]", cell.content);
        }
        println!();
    }
}

fn report_lines(card: &Card) {
    let lines = completed_lines(card.grid().size(), &card.checked_states());
    if lines.is_empty() {
        println!("No bingo yet.");
    } else {
        let labels: Vec<String> = lines.iter().map(ToString::to_string).collect();
        println!("BINGO! ({})", labels.join(", "));
    }
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
