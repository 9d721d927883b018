//! Demo dataset: a small e-commerce/support back office
//!
//! Registry and rows for the demo server and integration tests. Entity ids
//! are stable so links stay valid across restarts.

use crate::search::{MemoryBackend, ModelDescriptor, SearchRegistry, StoredRow};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub const PRODUCT: u32 = 11;
pub const CATEGORY: u32 = 12;
pub const ORDER: u32 = 21;
pub const TICKET: u32 = 31;
pub const FAQ: u32 = 32;
pub const ARTICLE: u32 = 41;
pub const USER: u32 = 51;
pub const EVENT: u32 = 61;

/// The demo registry: eight entities across six app groups
pub fn demo_registry() -> SearchRegistry {
    let mut registry = SearchRegistry::new();

    for descriptor in [
        ModelDescriptor::new(PRODUCT, "products", "product")
            .with_search_fields(&["name", "sku", "description", "category__name"])
            .with_display_field("name"),
        ModelDescriptor::new(CATEGORY, "products", "category")
            .with_search_fields(&["name", "description"])
            .with_verbose_names("category", "categories")
            .with_display_field("name"),
        ModelDescriptor::new(ORDER, "orders", "order")
            .with_search_fields(&["order_number", "user__username", "user__email", "notes"])
            .with_display_field("order_number"),
        ModelDescriptor::new(TICKET, "support", "ticket")
            .with_search_fields(&["ticket_number", "subject", "description", "user__username"])
            .with_display_field("subject"),
        ModelDescriptor::new(FAQ, "support", "faq")
            .with_search_fields(&["question", "answer"])
            .with_verbose_names("FAQ", "FAQs")
            .with_display_field("question"),
        ModelDescriptor::new(ARTICLE, "content", "article")
            .with_search_fields(&["title", "summary", "content", "author__username"])
            .with_display_field("title"),
        ModelDescriptor::new(USER, "users", "user")
            .with_search_fields(&["username", "email", "first_name", "last_name"])
            .with_display_field("username"),
        ModelDescriptor::new(EVENT, "analytics", "event")
            .with_search_fields(&["event_name", "event_description", "session_id"])
            .with_display_field("event_name")
            .without_changelist(),
    ] {
        registry
            .register(descriptor)
            .expect("demo registry uses unique entity ids");
    }

    registry
}

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap() + Duration::days(offset)
}

/// A backend seeded with the demo rows
pub fn seeded_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();

    backend.insert_rows(
        PRODUCT,
        vec![
            StoredRow::new(1, day(0))
                .with_field("name", "Trail Running Shoe")
                .with_field("sku", "SHOE-001")
                .with_field("description", "Lightweight trail running shoe with grip sole")
                .with_field("category__name", "Footwear"),
            StoredRow::new(2, day(1))
                .with_field("name", "Canvas Sneaker")
                .with_field("sku", "SHOE-002")
                .with_field("description", "Casual canvas shoe")
                .with_field("category__name", "Footwear"),
            StoredRow::new(3, day(2))
                .with_field("name", "Leather Hiking Boot")
                .with_field("sku", "BOOT-001")
                .with_field("description", "Waterproof leather boot")
                .with_field("category__name", "Footwear"),
            StoredRow::new(4, day(3))
                .with_field("name", "Wool Running Sock")
                .with_field("sku", "SOCK-001")
                .with_field("description", "Breathable sock for long runs")
                .with_field("category__name", "Accessories"),
            StoredRow::new(5, day(4))
                .with_field("name", "Shoe Care Kit")
                .with_field("sku", "KIT-001")
                .with_field("description", "Brush, polish and protector spray")
                .with_field("category__name", "Accessories"),
            StoredRow::new(6, day(5))
                .with_field("name", "Minimalist Road Shoe")
                .with_field("sku", "SHOE-003")
                .with_field("description", "Zero-drop road running shoe")
                .with_field("category__name", "Footwear"),
        ],
    );

    backend.insert_rows(
        CATEGORY,
        vec![
            StoredRow::new(1, day(0))
                .with_field("name", "Footwear")
                .with_field("description", "Shoes, boots and sandals"),
            StoredRow::new(2, day(0))
                .with_field("name", "Accessories")
                .with_field("description", "Socks, laces and care products"),
        ],
    );

    backend.insert_rows(
        ORDER,
        vec![
            StoredRow::new(1001, day(3))
                .with_field("order_number", "ORD-2025-1001")
                .with_field("user__username", "avery")
                .with_field("user__email", "avery@example.com")
                .with_field("notes", "Gift wrap the shoes please"),
            StoredRow::new(1002, day(4))
                .with_field("order_number", "ORD-2025-1002")
                .with_field("user__username", "jordan")
                .with_field("user__email", "jordan@example.com")
                .with_field("notes", ""),
        ],
    );

    backend.insert_rows(
        TICKET,
        vec![
            StoredRow::new(501, day(5))
                .with_field("ticket_number", "TCK-0501")
                .with_field("subject", "Wrong shoe size delivered")
                .with_field("description", "Ordered 42, received 44")
                .with_field("user__username", "avery"),
            StoredRow::new(502, day(6))
                .with_field("ticket_number", "TCK-0502")
                .with_field("subject", "Refund not received")
                .with_field("description", "Waiting two weeks for a refund")
                .with_field("user__username", "jordan"),
        ],
    );

    backend.insert_rows(
        FAQ,
        vec![
            StoredRow::new(1, day(0))
                .with_field("question", "How do I find my shoe size?")
                .with_field("answer", "Measure your foot and use the size chart."),
            StoredRow::new(2, day(0))
                .with_field("question", "What is the return window?")
                .with_field("answer", "Thirty days from delivery."),
        ],
    );

    backend.insert_rows(
        ARTICLE,
        vec![
            StoredRow::new(1, day(2))
                .with_field("title", "Choosing a trail shoe")
                .with_field("summary", "What to look for in grip and cushioning")
                .with_field("content", "A good trail shoe balances weight and protection…")
                .with_field("author__username", "editor"),
            StoredRow::new(2, day(3))
                .with_field("title", "Caring for leather boots")
                .with_field("summary", "Keep leather supple through winter")
                .with_field("content", "Clean, condition, and dry at room temperature…")
                .with_field("author__username", "editor"),
        ],
    );

    backend.insert_rows(
        USER,
        vec![
            StoredRow::new(1, day(0))
                .with_field("username", "avery")
                .with_field("email", "avery@example.com")
                .with_field("first_name", "Avery")
                .with_field("last_name", "Shoemaker"),
            StoredRow::new(2, day(0))
                .with_field("username", "jordan")
                .with_field("email", "jordan@example.com")
                .with_field("first_name", "Jordan")
                .with_field("last_name", "Lee"),
        ],
    );

    backend.insert_rows(
        EVENT,
        vec![
            StoredRow::new(90001, day(6))
                .with_field("event_name", "product_view")
                .with_field("event_description", "Viewed Trail Running Shoe")
                .with_field("session_id", "sess-8f3a"),
            StoredRow::new(90002, day(6))
                .with_field("event_name", "checkout_started")
                .with_field("event_description", "Cart with two items")
                .with_field("session_id", "sess-8f3a"),
        ],
    );

    backend
}
