//! Reusable test content.
//!
//! The billing domain covers every flattening shape:
//! - `id`: tuple newtype (simple wrapper, primary key)
//! - `customer_email`: optional wrapper with a fallible constructor
//! - `billing_address`: composite with public fields and no accessors
//! - the rest: scalars, one of them a chrono type

pub const CARGO_TOML: &str = r#"[package]
name = "shop"
version = "0.1.0"
edition = "2021"
"#;

pub const LIB_RS: &str = "pub mod domain;\n";

pub const DOMAIN_MOD_RS: &str = "pub mod billing;\npub mod shared;\n";

pub const BILLING_RS: &str = r#"use chrono::{DateTime, Utc};

use crate::domain::shared::{Address, Email};

pub struct InvoiceId(i64);

impl InvoiceId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

pub struct Invoice {
    id: InvoiceId,
    customer_email: Option<Email>,
    billing_address: Address,
    total_cents: i64,
    paid: bool,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        customer_email: Option<Email>,
        billing_address: Address,
        total_cents: i64,
        paid: bool,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_email,
            billing_address,
            total_cents,
            paid,
            issued_at,
        }
    }

    pub fn id(&self) -> &InvoiceId {
        &self.id
    }

    pub fn customer_email(&self) -> &Option<Email> {
        &self.customer_email
    }

    pub fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    pub fn total_cents(&self) -> i64 {
        self.total_cents
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

pub struct Status {
    id: i64,
    label: String,
}

impl Status {
    pub fn new(id: i64, label: String) -> Self {
        Self { id, label }
    }
}
"#;

pub const SHARED_RS: &str = r#"#[derive(Debug)]
pub struct EmailError;

pub struct Email {
    value: String,
}

impl Email {
    pub fn new(value: String) -> Result<Self, EmailError> {
        if value.contains('@') {
            Ok(Self { value })
        } else {
            Err(EmailError)
        }
    }

    pub fn value(&self) -> &String {
        &self.value
    }
}

pub struct Address {
    pub street: String,
    pub city: String,
}

impl Address {
    pub fn new(street: String, city: String) -> Self {
        Self { street, city }
    }
}
"#;

/// A composite holding another compound, which cannot be flattened
pub const NESTED_RS: &str = r#"pub struct Geo {
    lat: f64,
    lon: f64,
}

pub struct Location {
    name: String,
    geo: Geo,
}

pub struct Store {
    id: i64,
    location: Location,
}

impl Store {
    pub fn new(id: i64, location: Location) -> Self {
        Self { id, location }
    }
}
"#;

/// Schema-file description of a small user type
pub const USER_SCHEMA: &str = r#"
[[types]]
path = "crate::domain::accounts::User"
fields = [
    { name = "id", type = "i64" },
    { name = "email", type = "Email" },
    { name = "active", type = "bool" },
]
methods = [{ name = "email", returns = "&Email" }]
constructor = { params = [
    { name = "id", type = "i64" },
    { name = "email", type = "Email" },
    { name = "active", type = "bool" },
] }

[[types]]
path = "crate::domain::accounts::Email"
fields = [{ name = "value", type = "String" }]
methods = [{ name = "as_str", returns = "&String" }]
constructor = { params = [{ name = "value", type = "String" }] }
"#;

pub const INVOICE: &str = "crate::domain::billing::Invoice";
pub const PERSISTENCE_FILE: &str = "src/infrastructure/billing/persistence/db_invoice.rs";
pub const MAPPER_FILE: &str = "src/infrastructure/billing/persistence/db_invoice_mapper.rs";
