// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. The product subcommands run the same
// screen controllers headlessly, awaiting each request inline:
// - list / show <id>
// - add --name --description --price
// - edit <id> [--name] [--description] [--price]
// - delete <id> [--yes]
// - config --show | --path | --reset

use crate::config::{Config, VERSION};
use crate::form::Field;
use crate::product::Product;
use crate::screens::{settle, EditState, Notice, Route, Screen, CONFIRM_DELETE};
use crate::store::ProductStore;
use crate::sync::ListState;
use crate::util::truncate_to_width;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Shelf - terminal client for a Product REST API
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version = VERSION)]
#[command(about = "Browse, add, edit and delete products from the terminal", long_about = None)]
pub struct Cli {
    /// Product API base URL (overrides SHELF_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List all products
    List,
    /// Show one product
    Show { id: String },
    /// Add a product
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },
    /// Edit a product; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },
    /// Delete a product
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Config subcommand
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, path: bool, api_url: Option<String>) -> Result<()> {
    if path {
        let path = Config::config_path().context("Could not determine config path")?;
        println!("{}", path.display());
    } else if show {
        let mut config = Config::load()?;
        if let Some(url) = api_url {
            config.api_url = url;
        }
        println!("# Effective configuration (flags > env > file > defaults)");
        println!();
        print!("{}", config.to_toml());
    } else if reset {
        handle_config_reset()?;
    } else {
        println!("Usage: shelf config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists()
        && !confirm(&format!(
            "Config file exists at {}. Overwrite?",
            path.display()
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

/// Ask a yes/no question on stderr; anything but y/yes is no
fn confirm(question: &str) -> Result<bool> {
    eprint!("{} [y/N] ", question);
    std::io::stderr().flush().context("Failed to flush stderr")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read answer")?;
    let answer = input.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Product subcommands
// ─────────────────────────────────────────────────────────────────────────────

/// Run a product subcommand against `store`, writing results to `out`
///
/// Failures come back as errors carrying the same message the TUI would
/// show, so the process exits non-zero.
pub async fn run_command<S, W>(command: Commands, store: &S, out: &mut W) -> Result<()>
where
    S: ProductStore,
    W: Write,
{
    match command {
        Commands::List => list(store, out).await,
        Commands::Show { id } => show(store, id, out).await,
        Commands::Add {
            name,
            description,
            price,
        } => {
            add(
                store,
                [name, description, price].map(Option::unwrap_or_default),
                out,
            )
            .await
        }
        Commands::Edit {
            id,
            name,
            description,
            price,
        } => edit(store, id, [name, description, price], out).await,
        Commands::Delete { id, yes } => delete(store, id, yes, out).await,
        Commands::Config { .. } => bail!("config is handled before the store is built"),
    }
}

async fn list<S: ProductStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    let (mut screen, request) = Screen::mount(Route::List);
    settle(&mut screen, store, request).await;
    let Screen::List(list) = &screen else {
        bail!("list route mounted another screen");
    };

    match list.sync.state() {
        ListState::Ready(products) if products.is_empty() => {
            writeln!(out, "No products.")?;
        }
        ListState::Ready(products) => {
            let id_width = products.iter().map(|p| p.id.len()).max().unwrap_or(2).max(2);
            writeln!(
                out,
                "{:<id_width$}  {:<28}  {:>20}  DESCRIPTION",
                "ID", "NAME", "PRICE"
            )?;
            for product in products {
                writeln!(
                    out,
                    "{:<id_width$}  {:<28}  {:>20}  {}",
                    product.id,
                    truncate_to_width(&product.name, 28),
                    product.price_label(),
                    truncate_to_width(&product.description, 60),
                )?;
            }
        }
        ListState::Failed(message) => bail!("{}", message),
        ListState::Loading => bail!("Product list never finished loading"),
    }
    Ok(())
}

async fn show<S: ProductStore, W: Write>(store: &S, id: String, out: &mut W) -> Result<()> {
    let (mut screen, request) = Screen::mount(Route::Edit(Some(id.clone())));
    settle(&mut screen, store, request).await;
    let Screen::Edit(edit) = &screen else {
        bail!("edit route mounted another screen");
    };

    match edit.state() {
        EditState::Editing(form) => {
            let draft = form.draft();
            let product = Product {
                id,
                price: draft.parsed_price(),
                name: draft.name,
                description: draft.description,
            };
            writeln!(out, "ID:          {}", product.id)?;
            writeln!(out, "Name:        {}", product.name)?;
            writeln!(out, "Description: {}", product.description)?;
            writeln!(out, "Price:       {}", product.price_label())?;
            Ok(())
        }
        EditState::Failed(message) => bail!("{}", message),
        EditState::Loading => bail!("Product never finished loading"),
    }
}

async fn add<S: ProductStore, W: Write>(
    store: &S,
    values: [String; 3],
    out: &mut W,
) -> Result<()> {
    let (mut screen, _) = Screen::mount(Route::Add);
    let Screen::Add(add) = &mut screen else {
        bail!("add route mounted another screen");
    };
    for (field, value) in Field::ALL.into_iter().zip(values) {
        add.form.set(field, value);
    }

    let request = match add.submit() {
        Ok(request) => request,
        Err(notice) => bail!("{}", notice.text()),
    };
    let outcome = settle(&mut screen, store, Some(request)).await;
    report(outcome.navigate.is_some(), outcome.notice, out)
}

async fn edit<S: ProductStore, W: Write>(
    store: &S,
    id: String,
    changes: [Option<String>; 3],
    out: &mut W,
) -> Result<()> {
    let (mut screen, request) = Screen::mount(Route::Edit(Some(id)));
    settle(&mut screen, store, request).await;
    let Screen::Edit(edit) = &mut screen else {
        bail!("edit route mounted another screen");
    };

    match edit.state() {
        EditState::Editing(_) => {}
        EditState::Failed(message) => bail!("{}", message),
        EditState::Loading => bail!("Product never finished loading"),
    }
    let Some(form) = edit.form_mut() else {
        bail!("Product never finished loading");
    };
    for (field, value) in Field::ALL.into_iter().zip(changes) {
        if let Some(value) = value {
            form.set(field, value);
        }
    }

    let request = edit.submit();
    let outcome = settle(&mut screen, store, request).await;
    if outcome.navigate.is_some() {
        return report(true, outcome.notice, out);
    }
    match &screen {
        Screen::Edit(edit) => match &edit.error {
            Some(error) => bail!("{}", error),
            None => bail!("Update did not complete"),
        },
        _ => bail!("Update did not complete"),
    }
}

async fn delete<S: ProductStore, W: Write>(
    store: &S,
    id: String,
    yes: bool,
    out: &mut W,
) -> Result<()> {
    // Deleting goes through the loaded list, same as the TUI
    let (mut screen, request) = Screen::mount(Route::List);
    settle(&mut screen, store, request).await;
    let Screen::List(list) = &mut screen else {
        bail!("list route mounted another screen");
    };
    if let ListState::Failed(message) = list.sync.state() {
        bail!("{}", message);
    }

    if !yes {
        let name = list
            .sync
            .products()
            .iter()
            .find(|p| p.id == id)
            .map(|p| format!(" ({})", p.name))
            .unwrap_or_default();
        if !confirm(&format!("{}{}", CONFIRM_DELETE, name))? {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    let request = list.delete(&id);
    let outcome = settle(&mut screen, store, request).await;
    let succeeded = matches!(outcome.notice, Some(Notice::Toast(_)));
    report(succeeded, outcome.notice, out)
}

/// Print the success notice or turn the failure notice into an error
fn report<W: Write>(succeeded: bool, notice: Option<Notice>, out: &mut W) -> Result<()> {
    let text = notice.map(|n| n.text().to_string()).unwrap_or_default();
    if succeeded {
        writeln!(out, "{}", text)?;
        Ok(())
    } else {
        bail!("{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::{product, MockStore};
    use crate::store::StoreError;

    async fn run(command: Commands, store: &MockStore) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run_command(command, store, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["shelf", "delete", "p1", "--yes", "--api-url", "http://x"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Delete {
                id: "p1".into(),
                yes: true
            })
        );
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));

        assert!(Cli::try_parse_from(["shelf", "show"]).is_err());
    }

    #[tokio::test]
    async fn test_list_prints_rows() {
        let store = MockStore::with_products(vec![
            product("1", "Lamp", 19.5),
            product("2", "Mug", 6.0),
        ]);
        let (result, out) = run(Commands::List, &store).await;
        assert!(result.is_ok());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Lamp") && lines[1].contains("$19.50"));
        assert!(lines[2].contains("Mug") && lines[2].contains("$6.00"));
    }

    #[tokio::test]
    async fn test_list_failure_is_an_error() {
        let store = MockStore::default();
        store.fail_with(StoreError::transport("connection refused"));
        let (result, _) = run(Commands::List, &store).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_show_prints_product() {
        let store = MockStore::with_products(vec![product("1", "Lamp", 19.5)]);
        let (result, out) = run(Commands::Show { id: "1".into() }, &store).await;
        assert!(result.is_ok());
        assert!(out.contains("Name:        Lamp"));
        assert!(out.contains("Price:       $19.50"));
    }

    #[tokio::test]
    async fn test_add_requires_every_field() {
        let store = MockStore::default();
        let command = Commands::Add {
            name: Some("Lamp".into()),
            description: None,
            price: Some("3".into()),
        };
        let (result, _) = run(command, &store).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "All fields are required."
        );
        assert_eq!(store.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_add_reports_success() {
        let store = MockStore::default();
        let command = Commands::Add {
            name: Some("Lamp".into()),
            description: Some("Warm".into()),
            price: Some("3".into()),
        };
        let (result, out) = run(command, &store).await;
        assert!(result.is_ok());
        assert_eq!(out.trim(), "Product added successfully!");
        assert_eq!(store.calls("create"), 1);
        assert_eq!(store.products().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_keeps_omitted_fields() {
        let store = MockStore::with_products(vec![product("1", "Lamp", 19.5)]);
        let command = Commands::Edit {
            id: "1".into(),
            name: None,
            description: None,
            price: Some("21".into()),
        };
        let (result, out) = run(command, &store).await;
        assert!(result.is_ok());
        assert_eq!(out.trim(), "Product updated successfully!");

        let updated = &store.products()[0];
        assert_eq!(updated.name, "Lamp");
        assert_eq!(updated.price, Some(21.0));
    }

    #[tokio::test]
    async fn test_edit_unknown_id_fails() {
        let store = MockStore::default();
        let command = Commands::Edit {
            id: "nope".into(),
            name: Some("x".into()),
            description: None,
            price: None,
        };
        let (result, _) = run(command, &store).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to fetch product details."
        );
        assert_eq!(store.calls("update"), 0);
    }

    #[tokio::test]
    async fn test_delete_with_yes() {
        let store = MockStore::with_products(vec![
            product("1", "Lamp", 19.5),
            product("2", "Mug", 6.0),
        ]);
        let command = Commands::Delete {
            id: "1".into(),
            yes: true,
        };
        let (result, out) = run(command, &store).await;
        assert!(result.is_ok());
        assert_eq!(out.trim(), "Product deleted successfully!");
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.calls("remove"), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_is_an_error() {
        let store = MockStore::with_products(vec![product("1", "Lamp", 19.5)]);
        let command = Commands::Delete {
            id: "missing".into(),
            yes: true,
        };
        let (result, _) = run(command, &store).await;
        assert!(result.is_err());
        assert_eq!(store.products().len(), 1);
    }
}
