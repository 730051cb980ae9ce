//! Order Summary

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Columns, object::Rows},
};

use crate::{
    cart::{Cart, CartError},
    catalog::Catalog,
    pricing::{extended_price, sum_prices},
    shop::ShopItemId,
};

/// A priced cart line.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine {
    /// Shop item id
    pub item: ShopItemId,

    /// Item name at the time of the order
    pub name: String,

    /// Unit price
    pub unit_price: Money<'static, Currency>,

    /// Quantity ordered
    pub quantity: u32,

    /// Unit price × quantity
    pub line_total: Money<'static, Currency>,
}

/// Summary of a finalized cart.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSummary {
    lines: Vec<OrderLine>,
    total_items: u64,
    subtotal: Money<'static, Currency>,
}

impl OrderSummary {
    /// Price every line of `cart` against `catalog`.
    ///
    /// # Errors
    ///
    /// - [`CartError::UnknownItem`]: a line refers to an item missing from the catalog.
    /// - [`CartError::Pricing`]: a line total overflowed or used another currency.
    pub fn from_cart(cart: &Cart, catalog: &Catalog) -> Result<Self, CartError> {
        let lines = cart
            .lines()
            .iter()
            .map(|line| {
                let item = catalog
                    .shop_item(line.item)
                    .ok_or(CartError::UnknownItem(line.item))?;

                Ok(OrderLine {
                    item: item.id,
                    name: item.name.clone(),
                    unit_price: item.price,
                    quantity: line.quantity,
                    line_total: extended_price(&item.price, line.quantity)?,
                })
            })
            .collect::<Result<Vec<_>, CartError>>()?;

        let subtotal = sum_prices(lines.iter().map(|line| line.line_total), catalog.currency())?;

        Ok(OrderSummary {
            lines,
            total_items: cart.total_items(),
            subtotal,
        })
    }

    /// Priced lines, in cart order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Writes the summary as a table followed by the subtotal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Unit Price", "Qty", "Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.unit_price.to_string(),
                line.quantity.to_string(),
                line.line_total.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Items: {}", self.total_items)?;
        writeln!(out, " \x1b[1mSubtotal:\x1b[0m {}", self.subtotal)?;

        Ok(())
    }
}
