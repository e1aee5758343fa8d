//! chaysh CLI: ask one question, chat interactively, or list categories.
//! Config from env (.env supported); OPENROUTER_API_KEY is required to talk to
//! the provider.

use std::sync::Arc;

use anyhow::Result;
use categories::CategoryRegistry;
use chaysh_assistant::{Assistant, ChatRequest, ChatResponse, Lang, ResponsePayload};
use chaysh_core::{init_tracing, ConversationContext};
use clap::{Parser, Subcommand};
use llm_client::EnvLlmConfig;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(name = "chaysh")]
#[command(about = "Chaysh assistant CLI: ask, repl, categories", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the reply.
    Ask {
        query: String,
        /// Force a category instead of keyword detection.
        #[arg(short, long)]
        category: Option<String>,
        /// Interface language: en or pl.
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// Interactive chat; context is threaded between turns. `exit` to leave.
    Repl {
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// List the registered categories with keywords and descriptions.
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("chaysh.log")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            query,
            category,
            lang,
        } => {
            let assistant = build_assistant()?;
            let mut request = ChatRequest::new(query);
            request.category = category;
            request.lang = parse_lang(&lang)?;
            let response = assistant.ask(request).await?;
            print_response(&response)?;
            Ok(())
        }
        Commands::Repl { lang } => {
            let assistant = build_assistant()?;
            run_repl(assistant, parse_lang(&lang)?).await
        }
        Commands::Categories => {
            print_categories(&CategoryRegistry::builtin());
            Ok(())
        }
    }
}

/// Builds the assistant from env config. Missing OPENROUTER_API_KEY is fatal.
fn build_assistant() -> Result<Assistant> {
    let config = EnvLlmConfig::from_env()?;
    let params = config.params();
    let client = Arc::new(config.client());
    Ok(Assistant::new(CategoryRegistry::builtin(), client, params))
}

fn parse_lang(lang: &str) -> Result<Lang> {
    match lang {
        "en" => Ok(Lang::En),
        "pl" => Ok(Lang::Pl),
        other => anyhow::bail!("Unsupported language: {other} (expected en or pl)"),
    }
}

fn print_response(response: &ChatResponse) -> Result<()> {
    if let Some(tip) = &response.tip {
        println!("{tip}\n");
    }
    if let Some(category) = &response.category {
        println!("[category: {category}]");
    }
    match &response.response {
        ResponsePayload::Text(text) => println!("{text}"),
        ResponsePayload::Structured(result) => {
            println!("{}", serde_json::to_string_pretty(result)?)
        }
    }
    Ok(())
}

fn print_categories(registry: &CategoryRegistry) {
    for rule in registry.rules() {
        println!("{:<10} {}", rule.name, rule.description);
        println!("{:<10}   keywords: {}", "", rule.keywords.join(", "));
    }
}

/// Reads stdin lines, threading the conversation context between turns.
async fn run_repl(assistant: Assistant, lang: Lang) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut context = ConversationContext::new();

    println!("chaysh repl: type a question, `exit` or `quit` to leave.");
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let mut request = ChatRequest::new(line);
        request.lang = lang;
        request.context = context.clone();
        match assistant.ask(request).await {
            Ok(response) => {
                print_response(&response)?;
                context = response.context;
            }
            Err(err) => println!("error: {err}"),
        }
    }
    Ok(())
}
