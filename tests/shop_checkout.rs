//! Building and finalizing an order against the bundled shop.

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use pesqueiro::{
    cart::{Cart, CartError},
    catalog::Catalog,
    shop::clamp_quantity,
};

#[test]
fn two_lines_and_a_single_item() -> TestResult {
    let catalog = Catalog::builtin()?;
    let line = catalog.shop_item(101).ok_or("missing item 101")?;
    let hooks = catalog.shop_item(107).ok_or("missing item 107")?;

    let mut cart = Cart::new();
    cart.add(line)?;
    cart.add(line)?;
    cart.add(hooks)?;

    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.subtotal(&catalog)?, Money::from_minor(6297, USD));
    assert_eq!(cart.subtotal(&catalog)?.to_string(), "$62.97");

    Ok(())
}

#[test]
fn out_of_stock_item_cannot_be_added() -> TestResult {
    let catalog = Catalog::builtin()?;
    let hat = catalog.shop_item(108).ok_or("missing item 108")?;

    let mut cart = Cart::new();

    assert_eq!(cart.add(hat), Err(CartError::OutOfStock(108)));
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn stepper_quantities_stay_within_stock() -> TestResult {
    let catalog = Catalog::builtin()?;
    let bag = catalog.shop_item(106).ok_or("missing item 106")?;

    let mut cart = Cart::new();
    cart.add(bag)?;

    cart.set_quantity(bag.id, i64::from(clamp_quantity(bag, 99)));
    assert_eq!(cart.quantity_of(bag.id), 10);

    cart.set_quantity(bag.id, 0);
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn finalize_summarizes_and_empties_the_cart() -> TestResult {
    let catalog = Catalog::builtin()?;
    let gloves = catalog.shop_item(103).ok_or("missing item 103")?;

    let mut cart = Cart::new();
    cart.set_quantity(gloves.id, 2);

    let summary = cart.finalize(&catalog)?;

    assert_eq!(summary.total_items(), 2);
    assert_eq!(summary.subtotal(), Money::from_minor(3700, USD));
    assert!(cart.is_empty());

    let mut out = Vec::new();
    summary.write_to(&mut out)?;
    let rendered = String::from_utf8(out)?;

    assert!(rendered.contains("Fishing Gloves"));
    assert!(rendered.contains("$37.00"));

    assert_eq!(cart.finalize(&catalog), Err(CartError::Empty));

    Ok(())
}
