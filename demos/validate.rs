use gutschein::client::VoucherClient;
use gutschein::core::calculate_price;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() {
    let app_id = std::env::var("GUTSCHEIN_APP_ID").unwrap_or_default();
    let token = std::env::var("GUTSCHEIN_TOKEN").unwrap_or_default();
    let code = std::env::args().nth(1).unwrap_or_else(|| "SUMMER-10".into());

    let mut client = VoucherClient::builder(app_id, token).build().unwrap();
    client.set_identity("demo@example.com");

    println!("validating {code:?} ...");

    match client.validate(&code).await {
        Ok(result) if result.valid => {
            println!("  valid!");
            if result.voucher.discount.is_some() {
                let price = calculate_price(dec!(100), &result.voucher, Some(dec!(9.99)));
                println!("  price for a 100.00 cart: {price:?}");
            }
        }
        Ok(_) => println!("  not valid"),
        Err(e) => println!("  failed: {e}"),
    }
}
