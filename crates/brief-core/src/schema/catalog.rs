//! Built-in sections of the e-commerce project briefing.

use super::{Field, Section};

const YES_NO_UNSURE: &[&str] = &["Yes", "No", "Not sure yet"];

pub(super) fn briefing_sections() -> Vec<Section> {
    vec![
        project_goal(),
        products_and_sellers(),
        features(),
        design_and_style(),
        administration(),
        timeline_and_budget(),
    ]
}

fn project_goal() -> Section {
    Section::new(
        "Project Goal",
        "🎯",
        vec![
            Field::text_area("objective", "What is the main goal of the site/app?")
                .with_heading("Main Goal"),
            Field::text_area("targetAudience", "Who is the target audience?")
                .with_heading("Target Audience"),
            Field::text_area("competitors", "Any competitors or references?")
                .with_heading("Competitors/References"),
        ],
    )
}

fn products_and_sellers() -> Section {
    Section::new(
        "Products and Sellers",
        "🛍️",
        vec![
            Field::text_area("productTypes", "What kinds of products will be sold?")
                .with_heading("Product Types"),
            Field::single_choice(
                "multipleVendors",
                "Will there be more than one seller on the platform?",
                YES_NO_UNSURE,
            )
            .with_heading("Multiple Sellers"),
            Field::text_area("suppliers", "Do you already have partner suppliers/sellers?")
                .with_heading("Partner Suppliers"),
        ],
    )
}

fn features() -> Section {
    Section::new(
        "Features",
        "⚙️",
        vec![
            Field::multi_choice(
                "features",
                "Which features do you want?",
                &[
                    "Live chat",
                    "Coupon system",
                    "Product reviews",
                    "Sales dashboard",
                    "Shopping cart",
                    "Wishlist",
                    "Newsletter",
                    "Integrated blog",
                    "Advanced search",
                    "Mobile app",
                    "Order tracking",
                    "Payment gateway",
                    "Sales reports",
                    "Product customizer",
                    "Push notifications",
                    "Multi-language",
                    "Affiliate program",
                    "Multi-store",
                    "Inventory system",
                    "Marketing automation",
                ],
            )
            .with_heading("Desired Features"),
            Field::single_choice(
                "automaticShipping",
                "Do you want automatic shipping quotes?",
                YES_NO_UNSURE,
            )
            .with_heading("Automatic Shipping"),
            Field::multi_choice(
                "paymentMethods",
                "Which payment methods will you accept?",
                &[
                    "PIX",
                    "Credit card",
                    "Debit card",
                    "Bank slip",
                    "PayPal",
                    "PagSeguro",
                    "Mercado Pago",
                    "Cash on delivery",
                    "Bank transfer",
                    "Digital wallets",
                ],
            )
            .with_heading("Payment Methods"),
        ],
    )
}

fn design_and_style() -> Section {
    Section::new(
        "Design and Style",
        "🎨",
        vec![
            Field::single_choice(
                "hasLogo",
                "Do you already have a name or logo?",
                &[
                    "Yes, both (name + logo)",
                    "Only the name",
                    "Only the logo",
                    "Neither",
                    "Need help creating them",
                ],
            )
            .with_heading("Logo/Name"),
            Field::text("brandName", "Brand/company name:").with_heading("Brand Name"),
            Field::multi_choice(
                "colors",
                "Which colors or palette do you prefer?",
                &[
                    "Red",
                    "Blue",
                    "Green",
                    "Yellow",
                    "Orange",
                    "Purple",
                    "Brown",
                    "Black",
                    "White",
                    "Gray",
                    "Colorful/Vibrant",
                    "Neutral tones",
                    "Gold/Luxury",
                    "Natural tones",
                    "Pastel tones",
                    "Warm colors",
                ],
            )
            .with_heading("Color Palette"),
            Field::multi_choice(
                "style",
                "Desired visual style:",
                &[
                    "Young and modern",
                    "Classic and elegant",
                    "Minimalist",
                    "Corporate",
                    "Creative and different",
                    "Natural/Organic",
                    "Luxurious/Premium",
                    "Technological",
                    "Relaxed/Casual",
                    "Fun/Colorful",
                    "Clean/Professional",
                    "Artistic",
                    "Dynamic",
                    "Traditional",
                    "Innovative",
                    "Focused/Direct",
                ],
            )
            .with_heading("Visual Style"),
            Field::text_area("designReferences", "Sites or brands you admire (references):")
                .with_heading("Design References"),
        ],
    )
}

fn administration() -> Section {
    Section::new(
        "Administration",
        "👤",
        vec![
            Field::single_choice(
                "adminControl",
                "Do you want full control of the admin panel?",
                &["Yes", "No", "Partial"],
            )
            .with_heading("Admin Control"),
            Field::single_choice(
                "reports",
                "Do you need reports, charts and sales history?",
                YES_NO_UNSURE,
            )
            .with_heading("Reports"),
            Field::text_area("administrator", "Who will administer the platform?")
                .with_heading("Administrator"),
        ],
    )
}

fn timeline_and_budget() -> Section {
    Section::new(
        "Timeline and Budget",
        "💰",
        vec![
            Field::single_choice(
                "urgency",
                "How urgent is the project?",
                &[
                    "Very urgent (up to 30 days)",
                    "Urgent (30-60 days)",
                    "Normal (60-90 days)",
                    "No rush (90+ days)",
                    "Not decided yet",
                ],
            )
            .with_heading("Urgency"),
            Field::text("deadline", "Specific launch date (if any):")
                .with_heading("Specific Date"),
            Field::single_choice(
                "budgetRange",
                "Available budget range:",
                &[
                    "Up to R$ 5,000",
                    "R$ 5,000 - R$ 15,000",
                    "R$ 15,000 - R$ 30,000",
                    "R$ 30,000 - R$ 50,000",
                    "Above R$ 50,000",
                    "Let's talk about it",
                ],
            )
            .with_heading("Budget Range"),
            Field::multi_choice(
                "budgetIncludes",
                "The budget should include:",
                &[
                    "Full design",
                    "Development",
                    "Mobile version",
                    "Maintenance (first months)",
                    "Team training",
                    "Hosting and domain",
                    "Basic SEO",
                    "SSL certificate",
                    "Analytics/metrics",
                    "Initial digital marketing",
                    "Technical support",
                    "Automatic backups",
                ],
            )
            .with_heading("Budget Scope"),
            Field::single_choice(
                "paymentPreference",
                "Payment preference:",
                &[
                    "Upfront (discount)",
                    "50% start + 50% delivery",
                    "33% start + 33% middle + 34% end",
                    "More installments",
                    "Negotiate terms",
                ],
            )
            .with_heading("Payment Preference"),
            Field::text_area("budgetNotes", "Notes about budget or timeline:")
                .with_heading("Notes"),
        ],
    )
}
