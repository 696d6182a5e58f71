//! Demo records for a fresh instance
//!
//! Dates are placed relative to `today` so the board always shows work in
//! every state.

use chrono::{Duration, NaiveDate};
use crm_models::{
    AreaUnit, Material, Priority, Project, ProjectStatus, StockDraft, StockItem, User, UserDraft,
    UserRole, UserStatus,
};

fn days(today: NaiveDate, offset: i64) -> NaiveDate {
    today + Duration::days(offset)
}

#[allow(clippy::too_many_arguments)]
fn project(
    title: &str,
    description: &str,
    start: NaiveDate,
    end: NaiveDate,
    team: &[&str],
    priority: Priority,
    materials: Vec<Material>,
    progress: u8,
) -> Project {
    let mut project = Project::new(title, start, end, team.first().copied().unwrap_or_default());
    project.description = description.to_string();
    project.team = team.iter().map(|name| name.to_string()).collect();
    project.priority = priority;
    project.materials = materials;
    project.progress = progress;
    if progress > 0 && progress < 100 {
        project.status = ProjectStatus::InProgress;
    }
    project
}

pub fn projects(today: NaiveDate) -> Vec<Project> {
    vec![
        project(
            "Website Redesign",
            "Complete overhaul of company website with modern UI/UX",
            days(today, -30),
            days(today, 15),
            &["Alice", "Bob", "Charlie"],
            Priority::High,
            vec![
                Material::new("Design Tool", "Figma", 1.0, "license"),
                Material::new("Framework", "React", 1.0, "library"),
            ],
            65,
        ),
        project(
            "Mobile App Development",
            "Build native mobile app for iOS and Android",
            days(today, 5),
            days(today, 75),
            &["Diana", "Eve"],
            Priority::Medium,
            vec![
                Material::new("Framework", "React Native", 1.0, "framework"),
                Material::new("Platform", "Expo", 1.0, "platform"),
            ],
            0,
        ),
        project(
            "Database Migration",
            "Migrate legacy database to modern cloud solution",
            days(today, -45),
            days(today, -3),
            &["Frank", "Grace"],
            Priority::High,
            vec![
                Material::new("Database", "PostgreSQL", 1.0, "instance"),
                Material::new("Cloud Service", "AWS RDS", 1.0, "service"),
            ],
            100,
        ),
        project(
            "E-Commerce Platform Development",
            "Full-stack e-commerce platform with payment integration, inventory management, and customer portal",
            days(today, 20),
            days(today, 95),
            &["Sarah Johnson", "Mike Chen", "Emma Wilson", "James Rodriguez", "Lisa Park"],
            Priority::High,
            vec![
                Material::new("Framework", "Next.js", 1.0, "framework"),
                Material::new("Service", "Stripe API", 1.0, "service"),
            ],
            0,
        ),
        project(
            "Storefront Vinyl Banner",
            "Outdoor banner and window lettering for the bakery reopening",
            days(today, -2),
            days(today, 4),
            &["Mike Chen", "Sarah Johnson"],
            Priority::Medium,
            vec![
                Material::new("Material", "Vinyl Banner", 2.0, "piece").with_area(
                    2.0,
                    3.0,
                    AreaUnit::SquareMeter,
                ),
                Material::new("Material", "Adhesive Vinyl", 1.0, "roll"),
            ],
            30,
        ),
    ]
}

pub fn stock_items(today: NaiveDate) -> Vec<StockItem> {
    let rows: [(&str, &str, f64, f64, f64, &str, f64, &str, &str, i64); 6] = [
        ("A4 Premium Paper", "paper", 2500.0, 500.0, 5000.0, "sheets", 0.05, "Paper Solutions Ltd", "Warehouse A - Shelf 1", -20),
        ("Cyan Ink Cartridge HP", "ink", 3.0, 5.0, 20.0, "pcs", 85.5, "Ink Masters", "Storage Room B - Cabinet 2", -37),
        ("Vinyl Roll White 1.5m", "vinyl", 180.0, 50.0, 300.0, "m", 12.3, "Vinyl Pro", "Warehouse A - Roll Storage", -16),
        ("Canvas Premium 280gsm", "fabric", 15.5, 20.0, 100.0, "m²", 28.9, "Paper Solutions Ltd", "Climate Controlled Storage", -32),
        ("Acrylic Sheet 3mm Clear", "plastic", 45.0, 10.0, 80.0, "pcs", 15.75, "Vinyl Pro", "Warehouse B - Flat Storage", -18),
        ("Magenta Toner", "ink", 1.0, 3.0, 15.0, "pcs", 92.4, "Ink Masters", "Storage Room B - Cabinet 1", -54),
    ];
    rows.into_iter()
        .map(
            |(name, category, current, min, max, unit, price, supplier, location, restocked)| {
                StockDraft {
                    name: name.into(),
                    kind: "Material".into(),
                    category: category.into(),
                    current_stock: current,
                    min_stock: min,
                    max_stock: max,
                    unit: unit.into(),
                    unit_price: price,
                    supplier: supplier.into(),
                    location: location.into(),
                    last_restocked: Some(days(today, restocked)),
                }
                .into_item(today)
            },
        )
        .collect()
}

pub fn users(today: NaiveDate) -> Vec<User> {
    let rows = [
        ("John", "Smith", "john.smith@company.com", "+1 (555) 123-4567", UserRole::Admin, "Management", UserStatus::Active, -640, -1),
        ("Sarah", "Johnson", "sarah.j@company.com", "+1 (555) 234-5678", UserRole::ProjectManager, "Operations", UserStatus::Active, -586, -2),
        ("Mike", "Chen", "mike.chen@company.com", "+1 (555) 345-6789", UserRole::Designer, "Design", UserStatus::Active, -484, -3),
        ("Emma", "Wilson", "emma.w@company.com", "+1 (555) 456-7890", UserRole::Developer, "Development", UserStatus::Active, -407, -4),
        ("David", "Brown", "david.brown@client.com", "+1 (555) 567-8901", UserRole::Client, "External", UserStatus::Pending, -6, -6),
    ];
    rows.into_iter()
        .map(
            |(first, last, email, phone, role, department, status, joined, seen)| {
                let mut user = UserDraft {
                    first_name: first.into(),
                    last_name: last.into(),
                    email: email.into(),
                    phone: phone.into(),
                    role,
                    department: department.into(),
                    status,
                }
                .into_user(days(today, joined));
                user.last_login = days(today, seen)
                    .and_hms_opt(9, 0, 0)
                    .map(|login| login.and_utc());
                user
            },
        )
        .collect()
}
