use gutschein::core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Discount Pricing ===\n");

    let base = dec!(129.99);
    let vouchers = [
        Voucher::percent_off("SUMMER-10", dec!(10)),
        Voucher::percent_off("HALF-OFF", dec!(50)),
        Voucher::amount_off("WELCOME-5", 500),
        Voucher::amount_off("BIG-200", 20_000),
        Voucher::unit_off("TWO-FREE", dec!(2)),
    ];

    for voucher in &vouchers {
        let code = voucher.code.as_deref().unwrap_or("?");
        let unit_price = Some(dec!(9.99));
        match (
            calculate_price(base, voucher, unit_price),
            calculate_discount(base, voucher, unit_price),
        ) {
            (Ok(price), Ok(discount)) => {
                println!("  {code}: {base} -> {price} ({discount} off)")
            }
            (Err(e), _) | (_, Err(e)) => println!("  {code}: ERROR: {e}"),
        }
    }

    println!("\n=== Invalid Vouchers ===\n");

    let invalid = [
        Voucher::percent_off("P-150", dec!(150)),
        Voucher::percent_off("P-0", dec!(0)),
        Voucher::amount_off("A-0", 0),
        Voucher::unit_off("U-NEG", dec!(-1)),
    ];

    for voucher in &invalid {
        let code = voucher.code.as_deref().unwrap_or("?");
        match calculate_price(base, voucher, Some(dec!(9.99))) {
            Ok(price) => println!("  {code}: {price}"),
            Err(e) => println!("  {code}: rejected: {e}"),
        }
    }
}
