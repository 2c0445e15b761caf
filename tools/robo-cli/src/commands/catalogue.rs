//! List catalogue products.

use anyhow::Result;
use robo_commerce::catalog::Product;

use super::CatalogueArgs;
use crate::context::Context;

/// Run the catalogue command.
pub async fn run(args: CatalogueArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_storefront(&args.source).await;
    store.catalogue.set_filter(args.filter);
    store.catalogue.set_search(args.search);

    if ctx.output.is_json() {
        let visible: Vec<&Product> = store.catalogue.visible_products().collect();
        ctx.output.json(&visible);
        return Ok(());
    }

    let categories: Vec<String> = store.catalogue.categories().iter().map(|c| c.label()).collect();
    ctx.output.header(&format!(
        "Robots: {} (search \"{}\")",
        store.catalogue.filter().label(),
        store.catalogue.search()
    ));
    if !categories.is_empty() {
        ctx.output.kv("Categories", &categories.join(", "));
    }
    ctx.output.products(store.catalogue.visible_products());

    Ok(())
}
