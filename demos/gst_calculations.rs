//! GST calculation examples

use bigdecimal::BigDecimal;
use bizbooks_tax::{
    GstCalculator, GstCategory, GstInvoice, LineItem, Organization, TaxConfiguration,
};
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 BizBooks Tax - GST Calculation Examples\n");

    let seller = Organization::new("Bangalore Traders".to_string(), Some("KA".to_string()));
    let config = TaxConfiguration::new(seller.id);
    let calculator = GstCalculator::new();

    // 1. Slab rates configured for the organization
    println!("📊 GST Slabs:");
    for category in GstCategory::ALL {
        println!("  {:?}: {}%", category, config.gst_rate(category));
    }
    println!();

    // 2. Intra-state vs Inter-state
    let line = LineItem::new(
        BigDecimal::from(10),
        BigDecimal::from(1000),
        config.gst_rate(GstCategory::Higher),
    );

    println!("🏢 Intra-state Supply (KA → KA):");
    let intra = calculator.calculate_for_organization(&line, &seller, Some("KA"));
    println!("  Taxable Value: ₹{}", line.taxable_value());
    println!("  CGST:          ₹{}", intra.cgst_amount);
    println!("  SGST:          ₹{}", intra.sgst_amount);
    println!("  IGST:          ₹{}", intra.igst_amount);
    println!("  Total GST:     ₹{}", intra.tax_amount);
    println!();

    println!("🌍 Inter-state Supply (KA → MH):");
    let inter = calculator.calculate_for_organization(&line, &seller, Some("MH"));
    println!("  CGST:          ₹{}", inter.cgst_amount);
    println!("  SGST:          ₹{}", inter.sgst_amount);
    println!("  IGST:          ₹{}", inter.igst_amount);
    println!("  Total GST:     ₹{}", inter.tax_amount);
    println!();

    // 3. Paisa rounding
    println!("🔢 Paisa Rounding:");
    let fractional = LineItem::new(
        BigDecimal::from(1),
        BigDecimal::from_str("0.3333")?,
        BigDecimal::from(18),
    );
    let rounded = calculator.calculate(&fractional, Some("KA"), Some("KA"));
    println!(
        "  1 × ₹0.3333 @ 18% = ₹{} (CGST ₹{} + SGST ₹{})",
        rounded.tax_amount, rounded.cgst_amount, rounded.sgst_amount
    );
    println!();

    // 4. Multi-line invoice
    println!("🧾 Multi-item Invoice:");
    let items = [
        ("Rice - 10kg", 2, "150", GstCategory::Nil),
        ("Coffee powder - 500g", 1, "400", GstCategory::Reduced),
        ("Cooking oil - 1L", 3, "120", GstCategory::Standard),
        ("Consultation service", 1, "2000", GstCategory::Higher),
    ];

    let mut lines = Vec::new();
    for (description, quantity, price, category) in items.iter() {
        let line = LineItem::for_category(
            BigDecimal::from(*quantity),
            BigDecimal::from_str(price)?,
            *category,
            &config,
        );
        println!("  {} × {} @ ₹{} ({}%)", description, quantity, price, line.gst_rate);
        lines.push(line);
    }

    let invoice = GstInvoice::calculate(&calculator, lines, seller.state.as_deref(), Some("KA"));
    println!();
    println!("  Invoice Summary:");
    println!("    Taxable Value: ₹{}", invoice.total_taxable_value);
    println!("    Total CGST:    ₹{}", invoice.total_cgst);
    println!("    Total SGST:    ₹{}", invoice.total_sgst);
    println!("    Total IGST:    ₹{}", invoice.total_igst);
    println!("    Total GST:     ₹{}", invoice.total_tax);
    println!("    Grand Total:   ₹{}", invoice.grand_total);

    println!("\n🎉 GST calculation examples completed successfully!");
    Ok(())
}
