use std::io;

use clap::Args;
use pesqueiro::{
    cart::Cart,
    catalog::Catalog,
    order::OrderSummary,
    shop::{ShopItemId, clamp_quantity},
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::write_failed;

#[derive(Debug, Args)]
pub(crate) struct ShopArgs {
    /// Add one unit of an item to the cart; repeat to add more
    #[arg(long = "add", value_name = "ID")]
    add: Vec<ShopItemId>,

    /// Set an item's quantity after all additions; 0 removes it
    #[arg(long = "set", value_name = "ID=QTY", value_parser = parse_quantity)]
    set: Vec<(ShopItemId, i64)>,

    /// Submit the cart as an order
    #[arg(long)]
    finalize: bool,
}

pub(crate) fn run(
    args: &ShopArgs,
    catalog: &Catalog,
    out: &mut impl io::Write,
) -> Result<(), String> {
    if args.add.is_empty() && args.set.is_empty() {
        return write_catalog(catalog, out).map_err(|error| write_failed(&error));
    }

    let mut cart = Cart::new();

    for &id in &args.add {
        let item = catalog
            .shop_item(id)
            .ok_or_else(|| format!("no shop item with id {id}"))?;

        cart.add(item).map_err(|error| error.to_string())?;
    }

    for &(id, quantity) in &args.set {
        let item = catalog
            .shop_item(id)
            .ok_or_else(|| format!("no shop item with id {id}"))?;

        let quantity = if quantity <= 0 {
            0
        } else {
            clamp_quantity(item, quantity)
        };

        cart.set_quantity(id, i64::from(quantity));
    }

    if cart.is_empty() {
        return writeln!(out, "cart is empty").map_err(|error| write_failed(&error));
    }

    if args.finalize {
        let summary = cart.finalize(catalog).map_err(|error| error.to_string())?;

        summary.write_to(&mut *out).map_err(|error| write_failed(&error))?;

        writeln!(
            out,
            "\n Order submitted. This order is a reservation only; please pay in person at the Fish and Pay store."
        )
        .map_err(|error| write_failed(&error))
    } else {
        OrderSummary::from_cart(&cart, catalog)
            .map_err(|error| error.to_string())?
            .write_to(&mut *out)
            .map_err(|error| write_failed(&error))
    }
}

fn write_catalog(catalog: &Catalog, out: &mut impl io::Write) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Item", "Description", "Price", "Stock"]);

    for item in catalog.shop_items() {
        let stock = if item.in_stock() {
            format!("{} in stock", item.stock)
        } else {
            "Out of Stock".to_string()
        };

        builder.push_record([
            item.id.to_string(),
            item.name.clone(),
            item.description.clone(),
            item.price.to_string(),
            stock,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}")
}

fn parse_quantity(s: &str) -> Result<(ShopItemId, i64), String> {
    let (id, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got {s}"))?;

    let id = id
        .trim()
        .parse()
        .map_err(|error| format!("invalid item id {id}: {error}"))?;

    let quantity = quantity
        .trim()
        .parse()
        .map_err(|error| format!("invalid quantity {quantity}: {error}"))?;

    Ok((id, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quantity_reads_pairs() {
        assert_eq!(parse_quantity("101=3"), Ok((101, 3)));
        assert_eq!(parse_quantity("107 = -1"), Ok((107, -1)));
        assert!(parse_quantity("101").is_err());
        assert!(parse_quantity("abc=1").is_err());
    }
}
