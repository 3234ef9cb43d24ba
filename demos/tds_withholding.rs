//! TDS withholding examples using the in-memory store

use bizbooks_tax::{
    utils::{MemoryStorage, RawPayment, StrictAmountValidator},
    Organization, TaxConfiguration, TaxConfigurationStore, TaxEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💸 BizBooks Tax - TDS Withholding Examples\n");

    let mut storage = MemoryStorage::new();
    let org = Organization::new("Bangalore Traders".to_string(), Some("KA".to_string()));
    storage.save_organization(&org).await?;

    let yaml = format!(
        "organization_id: {}\ntds_rates:\n  Contractor: \"10\"\n",
        org.id
    );
    storage
        .save_tax_configuration(&TaxConfiguration::from_yaml_str(&yaml)?)
        .await?;

    let engine = TaxEngine::with_validator(storage, Box::new(StrictAmountValidator));

    let payments = [
        ("100000.00", "Contractor Payment"),
        ("50000.00", "Rent"),
        ("1234.56", "sub-contractor"),
    ];

    for (gross, nature) in payments {
        let result = engine
            .calculate_tds(org.id, &RawPayment::new(gross), nature)
            .await?;
        println!("  {} on ₹{}:", nature, gross);
        println!("    Rate:       {}% ({:?})", result.rate, result.rate_source);
        println!("    TDS:        ₹{}", result.tds_amount);
        println!("    Net Payout: ₹{}", result.net_payment);
    }

    println!("\n❌ Invalid input:");
    match engine
        .calculate_tds(org.id, &RawPayment::new("-500"), "Contractor")
        .await
    {
        Ok(_) => println!("  accepted"),
        Err(e) => println!("  {}", e),
    }

    Ok(())
}
