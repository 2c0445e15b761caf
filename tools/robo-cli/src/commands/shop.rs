//! Interactive storefront session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use robo_commerce::catalog::{CatalogueView, Product};
use robo_commerce::search::CategoryFilter;
use robo_commerce::{ProductId, Storefront};

use super::ShopArgs;
use crate::context::Context;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Browse,
    Filter,
    Search,
    QuickView,
    ViewCart,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::Browse,
        MenuAction::Filter,
        MenuAction::Search,
        MenuAction::QuickView,
        MenuAction::ViewCart,
        MenuAction::Quit,
    ];

    fn label(&self, store: &Storefront) -> String {
        match self {
            MenuAction::Browse => "Browse robots".to_string(),
            MenuAction::Filter => format!("Filter ({})", store.catalogue.filter().label()),
            MenuAction::Search => match store.catalogue.search() {
                "" => "Search".to_string(),
                term => format!("Search (\"{}\")", term),
            },
            MenuAction::QuickView => "Quick view".to_string(),
            MenuAction::ViewCart => store.cart.summary().heading(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// Drawer entries for a selected cart line.
const LINE_ACTIONS: [&str; 5] = ["+", "-", "Set quantity", "Remove", "Back"];

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop session is interactive and has no JSON output");
    }

    let mut store = ctx.open_storefront(&args.source).await;
    ctx.output.header("NorthernAI Robotics");

    loop {
        let labels: Vec<String> = MenuAction::ALL.iter().map(|a| a.label(&store)).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuAction::ALL[choice] {
            MenuAction::Browse => ctx.output.products(store.catalogue.visible_products()),
            MenuAction::Filter => choose_filter(&mut store.catalogue)?,
            MenuAction::Search => {
                let term: String = Input::new()
                    .with_prompt("Search robots")
                    .with_initial_text(store.catalogue.search())
                    .allow_empty(true)
                    .interact_text()?;
                store.catalogue.set_search(term);
                ctx.output.products(store.catalogue.visible_products());
            }
            MenuAction::QuickView => quick_view(&mut store, ctx)?,
            MenuAction::ViewCart => cart_drawer(&mut store, ctx)?,
            MenuAction::Quit => {
                if store.cart.is_empty()
                    || Confirm::new()
                        .with_prompt("Leave with items in your cart?")
                        .default(false)
                        .interact()?
                {
                    break;
                }
            }
        }
    }

    ctx.output.cart(&store.cart.summary());
    Ok(())
}

/// Filter buttons: "All" followed by the catalogue's categories.
fn filter_choices(view: &CatalogueView) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(view.categories().into_iter().map(CategoryFilter::Only))
        .collect()
}

fn choose_filter(view: &mut CatalogueView) -> Result<()> {
    let choices = filter_choices(view);
    let labels: Vec<String> = choices.iter().map(|f| f.label()).collect();
    let current = choices.iter().position(|f| f == view.filter()).unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact()?;
    view.set_filter(choices[choice].clone());
    Ok(())
}

/// Pick one of the visible products. `None` when nothing is visible.
fn pick_product(view: &CatalogueView, prompt: &str) -> Result<Option<ProductId>> {
    let visible: Vec<&Product> = view.visible_products().collect();
    if visible.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = visible
        .iter()
        .map(|p| format!("{} - {}", p.name, p.price))
        .collect();
    let choice = Select::new().with_prompt(prompt).items(&labels).interact()?;
    Ok(Some(visible[choice].id.clone()))
}

fn quick_view(store: &mut Storefront, ctx: &Context) -> Result<()> {
    let Some(id) = pick_product(&store.catalogue, "View which robot?")? else {
        ctx.output.info("No products match.");
        return Ok(());
    };
    store.catalogue.open_quick_view(&id);

    if let Some(product) = store.catalogue.quick_view() {
        ctx.output.header(&product.name);
        ctx.output.kv("Category", &product.category.label());
        ctx.output.kv("Price", &product.price.display());
        ctx.output.kv("Image", product.image_or_placeholder());
    }

    let add = Select::new()
        .items(&["Add to Cart", "Close"])
        .default(0)
        .interact()?
        == 0;

    if add {
        if let Some(quantity) = store.add_quick_view_to_cart()? {
            ctx.output.success(&format!("Added to cart (quantity {})", quantity));
        }
    } else {
        store.catalogue.close_quick_view();
    }
    Ok(())
}

fn cart_drawer(store: &mut Storefront, ctx: &Context) -> Result<()> {
    store.open_cart();

    loop {
        let summary = store.cart.summary();
        ctx.output.cart(&summary);
        if summary.is_empty() {
            break;
        }

        let mut labels: Vec<String> = summary
            .lines
            .iter()
            .map(|l| format!("{} x{}", l.name, l.quantity))
            .collect();
        labels.push("Close cart".to_string());

        let choice = Select::new()
            .with_prompt("Adjust a line")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;
        let Some(line) = summary.lines.get(choice) else {
            break;
        };

        let action = Select::new().items(&LINE_ACTIONS).default(0).interact()?;
        match LINE_ACTIONS[action] {
            "+" => {
                store.cart.increment(&line.product_id);
            }
            "-" => {
                store.cart.decrement(&line.product_id);
            }
            "Set quantity" => {
                let quantity: i64 = Input::new()
                    .with_prompt("Quantity")
                    .default(line.quantity)
                    .interact_text()?;
                if !store.cart.update_quantity(&line.product_id, quantity) {
                    ctx.output.warn("Quantity must be at least 1");
                }
            }
            "Remove" => {
                store.cart.remove_from_cart(&line.product_id);
            }
            _ => {}
        }
    }

    store.close_cart();
    Ok(())
}
