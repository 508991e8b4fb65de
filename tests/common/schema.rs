//! In-process generation against a schema string.

use persistgen::application::{Analysis, GenerateUseCase, GenerationSettings};
use persistgen::config::Config;
use persistgen::domain::services::MetadataExtractor;
use persistgen::domain::value_objects::TypePath;
use persistgen::infrastructure::{LocalFs, SchemaFileLoader};
use persistgen::GenResult;

pub type SchemaUseCase = GenerateUseCase<SchemaFileLoader, LocalFs>;

pub fn schema_use_case(schema: &str) -> SchemaUseCase {
    let loader = SchemaFileLoader::from_str(schema, "schema.toml").expect("schema parses");
    let config = Config::default();
    GenerateUseCase::new(
        MetadataExtractor::new(loader, config.scalar_types()),
        LocalFs::new(),
        GenerationSettings::from_config(&config),
    )
}

pub fn analyze(schema: &str, type_path: &str) -> GenResult<Analysis> {
    schema_use_case(schema).analyze(&TypePath::parse(type_path).expect("valid type path"))
}

/// Builds one `[[types]]` entry
pub struct SchemaType {
    path: String,
    fields: Vec<(String, String)>,
    methods: Vec<(String, String)>,
    constructor: Option<(Vec<(String, String)>, Option<String>)>,
}

impl SchemaType {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructor: None,
        }
    }

    pub fn field(mut self, name: &str, ty: &str) -> Self {
        self.fields.push((name.to_string(), ty.to_string()));
        self
    }

    pub fn method(mut self, name: &str, returns: &str) -> Self {
        self.methods.push((name.to_string(), returns.to_string()));
        self
    }

    /// Constructor taking every field, in field order
    pub fn ctor_from_fields(mut self) -> Self {
        self.constructor = Some((self.fields.clone(), None));
        self
    }

    pub fn ctor(mut self, params: &[(&str, &str)], returns: Option<&str>) -> Self {
        let params = params
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect();
        self.constructor = Some((params, returns.map(str::to_string)));
        self
    }

    pub fn to_toml(&self) -> String {
        let pairs = |items: &[(String, String)], key: &str| {
            items
                .iter()
                .map(|(n, t)| format!("{{ name = \"{}\", {} = \"{}\" }}", n, key, t))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut out = format!("[[types]]\npath = \"{}\"\n", self.path);
        out.push_str(&format!("fields = [{}]\n", pairs(&self.fields, "type")));
        out.push_str(&format!("methods = [{}]\n", pairs(&self.methods, "returns")));
        if let Some((params, returns)) = &self.constructor {
            let returns = returns
                .as_ref()
                .map(|r| format!(", returns = \"{}\"", r))
                .unwrap_or_default();
            out.push_str(&format!(
                "constructor = {{ params = [{}]{} }}\n",
                pairs(params, "type"),
                returns
            ));
        }
        out
    }
}

pub fn schema(types: &[SchemaType]) -> String {
    types
        .iter()
        .map(SchemaType::to_toml)
        .collect::<Vec<_>>()
        .join("\n")
}
