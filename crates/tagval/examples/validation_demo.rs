//! Example demonstrating tag-driven validation
//!
//! Run with `RUST_LOG` unset; the library only logs through the `log` facade.

use std::collections::HashMap;
use std::time::Duration;
use tagval::{tag_name, validate, validate_with, BoxError, Error, Reflect, Validate};

#[derive(Reflect)]
#[reflect(validate)]
struct ServerConfig {
    #[tag(validate = "format=hostname", strict = "format=fqdn")]
    host: String,
    #[tag(validate = "gte=1&lte=65535", strict = "gte=1024&lte=65535")]
    port: u32,
    #[tag(validate = "gte=100ms & lte=30s")]
    timeout: Duration,
    #[tag(validate = "[format=alpha] > format=url")]
    upstreams: HashMap<String, String>,
    #[tag(validate = "lte=3 > format=cidr")]
    allow: Vec<String>,
    #[tag(validate = "nil=true | nil=false > format=email")]
    admin: Option<String>,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), BoxError> {
        if self.upstreams.is_empty() && self.allow.is_empty() {
            return Err("a server needs upstreams or an allow list".into());
        }
        Ok(())
    }
}

fn report(name: &str, result: Result<(), Error>) {
    match result {
        Ok(()) => println!("✓ {} is valid", name),
        Err(Error::Syntax(e)) => println!("✗ {} has a broken tag: {}", name, e),
        Err(Error::Validation(e)) => {
            println!("✗ {} is invalid: {}", name, e);
            println!("  offending value: {}", e.field_value);
        }
        Err(Error::Custom(e)) => println!("✗ {} was rejected: {}", name, e),
    }
}

fn main() {
    println!("Tagval Validation Demo");
    println!("======================\n");

    let config = ServerConfig {
        host: "api-gateway".to_string(),
        port: 8080,
        timeout: Duration::from_secs(5),
        upstreams: HashMap::from([(
            "users".to_string(),
            "https://users.internal:9000".to_string(),
        )]),
        allow: vec!["10.0.0.0/8".to_string()],
        admin: Some("ops@example.com".to_string()),
    };

    println!("1. Default tag");
    report("config", validate(&config));

    println!("\n2. Stricter rules under the `strict` tag");
    report("config", validate_with(&config, [tag_name("strict")]));

    println!("\n3. Broken data");
    let bad_port = ServerConfig { port: 0, ..config };
    report("bad_port", validate(&bad_port));

    let bad_upstream = ServerConfig {
        upstreams: HashMap::from([("users".to_string(), "not a url".to_string())]),
        ..bad_port
    };
    let bad_upstream = ServerConfig { port: 443, ..bad_upstream };
    report("bad_upstream", validate(&bad_upstream));

    println!("\n4. Custom validator");
    let isolated = ServerConfig {
        upstreams: HashMap::new(),
        allow: vec![],
        ..bad_upstream
    };
    report("isolated", validate(&isolated));

    println!("\n5. Plain JSON documents");
    let document = serde_json::json!({"name": "demo", "tags": ["a", "b"]});
    report("document", validate(&document));
}
