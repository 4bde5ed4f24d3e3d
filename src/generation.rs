use crate::core::{QualityScore, analyze_code_quality};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid json object regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedCode {
    pub html: String,
    pub css: String,
    pub js: String,
    pub react: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGeneration {
    pub code: GeneratedCode,
    pub raw: Value,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionResponse {
    pub html: String,
    pub css: String,
    pub js: String,
    pub react: String,
    pub json: Value,
    pub quality: QualityScore,
}

pub fn parse_model_response(text: &str) -> ParsedGeneration {
    match try_parse(text) {
        Some((code, raw)) => ParsedGeneration {
            code,
            raw,
            used_fallback: false,
        },
        None => {
            let code = GeneratedCode::placeholder();
            let raw = serde_json::to_value(&code).unwrap_or(Value::Null);
            ParsedGeneration {
                code,
                raw,
                used_fallback: true,
            }
        }
    }
}

fn try_parse(text: &str) -> Option<(GeneratedCode, Value)> {
    let span = JSON_OBJECT_RE.find(text)?;
    let raw: Value = serde_json::from_str(span.as_str()).ok()?;
    let code = lenient_fields(&raw)?;
    Some((code, raw))
}

// Non-string html/css/js/react values are treated as absent rather than
// rejecting the whole reply.
fn lenient_fields(raw: &Value) -> Option<GeneratedCode> {
    let object = raw.as_object()?;
    let text_field = |name: &str| {
        object
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Some(GeneratedCode {
        html: text_field("html"),
        css: text_field("css"),
        js: text_field("js"),
        react: text_field("react"),
        structure: object.get("structure").filter(|value| is_truthy(value)).cloned(),
    })
}

// null, false, "" and 0 leave the response to fall back to the whole object.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ParsedGeneration {
    pub fn into_response(self) -> ConversionResponse {
        let quality = analyze_code_quality(&self.code.html, &self.code.css, &self.code.js);
        let json = self.code.structure.clone().unwrap_or(self.raw);

        ConversionResponse {
            html: self.code.html,
            css: self.code.css,
            js: self.code.js,
            react: self.code.react,
            json,
            quality,
        }
    }
}

impl GeneratedCode {
    pub fn placeholder() -> Self {
        Self {
            html: PLACEHOLDER_HTML.to_string(),
            css: PLACEHOLDER_CSS.to_string(),
            js: String::new(),
            react: PLACEHOLDER_REACT.to_string(),
            structure: Some(json!({
                "type": "page",
                "sections": ["header", "hero", "footer"],
            })),
        }
    }
}

const PLACEHOLDER_HTML: &str = r##"<div class="container">
  <header class="header">
    <h1>Generated Website</h1>
    <nav><a href="#">Home</a> <a href="#">About</a> <a href="#">Contact</a></nav>
  </header>
  <main class="main">
    <section class="hero">
      <h2>Welcome to Your Website</h2>
      <p>This is a placeholder. The wireframe could not be fully parsed.</p>
      <button class="btn">Get Started</button>
    </section>
  </main>
  <footer class="footer">
    <p>&copy; Your Website</p>
  </footer>
</div>"##;

const PLACEHOLDER_CSS: &str = r##"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: system-ui, sans-serif; line-height: 1.6; color: #1f2937; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 0; border-bottom: 1px solid #e5e7eb; }
.header h1 { font-size: 1.5rem; color: #6366f1; }
.header nav a { margin-left: 1.5rem; color: #4b5563; text-decoration: none; }
.header nav a:hover { color: #6366f1; }
.hero { text-align: center; padding: 4rem 0; }
.hero h2 { font-size: 2.5rem; margin-bottom: 1rem; }
.hero p { color: #6b7280; max-width: 600px; margin: 0 auto 2rem; }
.btn { background: linear-gradient(to right, #6366f1, #8b5cf6); color: white; border: none; padding: 0.75rem 2rem; border-radius: 0.5rem; font-size: 1rem; cursor: pointer; }
.btn:hover { opacity: 0.9; }
.footer { text-align: center; padding: 2rem 0; border-top: 1px solid #e5e7eb; color: #6b7280; }
@media (max-width: 768px) { .header { flex-direction: column; gap: 1rem; } .hero h2 { font-size: 1.75rem; } }"##;

const PLACEHOLDER_REACT: &str = r##"export default function GeneratedComponent() {
  return (
    <div className="min-h-screen bg-white">
      <header className="border-b">
        <div className="container mx-auto px-4 py-4 flex justify-between items-center">
          <h1 className="text-xl font-bold text-indigo-600">Generated Website</h1>
          <nav className="space-x-6">
            <a href="#" className="text-gray-600 hover:text-indigo-600">Home</a>
            <a href="#" className="text-gray-600 hover:text-indigo-600">About</a>
            <a href="#" className="text-gray-600 hover:text-indigo-600">Contact</a>
          </nav>
        </div>
      </header>
      <main className="container mx-auto px-4 py-16 text-center">
        <h2 className="text-4xl font-bold mb-4">Welcome to Your Website</h2>
        <p className="text-gray-600 max-w-xl mx-auto mb-8">This is placeholder content.</p>
        <button className="bg-gradient-to-r from-indigo-500 to-purple-500 text-white px-8 py-3 rounded-lg hover:opacity-90">
          Get Started
        </button>
      </main>
    </div>
  );
}"##;
