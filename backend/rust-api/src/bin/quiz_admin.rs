use anyhow::Context;
use clap::{Parser, Subcommand};
use rusqlite::{params, Connection};
use tracing_subscriber::fmt::init;

use quizfeed_api::config::Config;

/// Offline maintenance tool for the relational quiz table. Rows here use
/// three fixed answer slots; the feed endpoint reads the JSON store
/// instead, and the two are not assumed consistent.
#[derive(Parser)]
#[command(name = "quiz-admin", about = "Maintain the SQLite quiz table")]
struct Cli {
    /// Path to the SQLite database (defaults to the configured quiz_db_path)
    #[arg(long)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the quizz table if it does not exist
    Init,
    /// Append one question row
    Add {
        #[arg(long)]
        theme: String,
        #[arg(long)]
        question: String,
        #[arg(long)]
        rep1: String,
        #[arg(long)]
        rep2: String,
        #[arg(long)]
        rep3: String,
        #[arg(long)]
        bonne_rep: String,
    },
    /// Print all stored rows
    List,
}

#[derive(Debug, PartialEq)]
struct QuizRow {
    theme: String,
    question: String,
    rep1: String,
    rep2: String,
    rep3: String,
    bonne_rep: String,
}

fn main() -> anyhow::Result<()> {
    init();

    let cli = Cli::parse();

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            let config = Config::load().context("Failed to load configuration")?;
            config.quiz_db_path
        }
    };

    let conn = Connection::open(&db_path)
        .with_context(|| format!("Failed to open SQLite database at {}", db_path))?;

    match cli.command {
        Command::Init => {
            init_table(&conn)?;
            tracing::info!("quizz table ready in {}", db_path);
        }
        Command::Add {
            theme,
            question,
            rep1,
            rep2,
            rep3,
            bonne_rep,
        } => {
            let row = QuizRow {
                theme,
                question,
                rep1,
                rep2,
                rep3,
                bonne_rep,
            };
            insert_row(&conn, &row)?;
            tracing::info!("Inserted question into theme '{}'", row.theme);
        }
        Command::List => {
            let rows = fetch_rows(&conn)?;
            for row in &rows {
                println!(
                    "[{}] {} (bonne réponse: {})",
                    row.theme, row.question, row.bonne_rep
                );
            }
            println!("{} rows total", rows.len());
        }
    }

    Ok(())
}

fn init_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS quizz (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            theme TEXT NOT NULL,
            question TEXT NOT NULL,
            rep1 TEXT NOT NULL,
            rep2 TEXT NOT NULL,
            rep3 TEXT NOT NULL,
            bonne_rep TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn insert_row(conn: &Connection, row: &QuizRow) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO quizz (theme, question, rep1, rep2, rep3, bonne_rep)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            row.theme,
            row.question,
            row.rep1,
            row.rep2,
            row.rep3,
            row.bonne_rep
        ],
    )?;
    Ok(())
}

fn fetch_rows(conn: &Connection) -> rusqlite::Result<Vec<QuizRow>> {
    let mut statement = conn.prepare(
        "SELECT theme, question, rep1, rep2, rep3, bonne_rep FROM quizz ORDER BY id",
    )?;
    let rows = statement.query_map([], |row| {
        Ok(QuizRow {
            theme: row.get(0)?,
            question: row.get(1)?,
            rep1: row.get(2)?,
            rep2: row.get(3)?,
            rep3: row.get(4)?,
            bonne_rep: row.get(5)?,
        })
    })?;

    rows.collect()
}
