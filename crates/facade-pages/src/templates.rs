//! Template engine for rendering page source files.

use minijinja::{context, AutoEscape, Environment};

use facade_glossary::{Category, Glossary};

use crate::catalog::Catalog;

/// One glossary record, pre-encoded as JS string literals for embedding.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TermEntry {
    pub term: String,
    pub category: String,
    pub full: String,
    pub short: String,
    pub detail: String,
}

/// One filter pill. `icon` is a bare identifier, the rest are JS literals.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CategoryPill {
    pub id: String,
    pub label: String,
    pub icon: String,
}

/// One calculator card entry for the product page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CalculatorEntry {
    pub icon: String,
    pub color: String,
    pub name: String,
    pub description: String,
    /// Pre-rendered JS array literal
    pub features: String,
    pub href: String,
    pub free: bool,
}

/// One benefit row entry for the product page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BenefitEntry {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Context for the sign-in page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SignInContext {
    pub brand: String,
    pub financing_url: String,
    pub financing_label: String,
}

/// Context for the product page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProductContext {
    pub calculator_count: usize,
    pub icon_imports: String,
    pub calculators: Vec<CalculatorEntry>,
    pub benefits: Vec<BenefitEntry>,
}

impl ProductContext {
    /// Build the template context from a catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let mut icons: Vec<String> = Vec::new();
        for calculator in &catalog.calculators {
            if !icons.contains(&calculator.icon) {
                icons.push(calculator.icon.clone());
            }
        }
        for name in ["ArrowRight", "Check"] {
            if !icons.iter().any(|i| i == name) {
                icons.push(name.to_string());
            }
        }
        for benefit in &catalog.benefits {
            if !icons.contains(&benefit.icon) {
                icons.push(benefit.icon.clone());
            }
        }

        Self {
            calculator_count: catalog.calculators.len(),
            icon_imports: icons.join(", "),
            calculators: catalog
                .calculators
                .iter()
                .map(|c| CalculatorEntry {
                    icon: c.icon.clone(),
                    color: js_str(&c.color),
                    name: js_str(&c.name),
                    description: js_str(&c.description),
                    features: js_str_array(&c.features),
                    href: js_str(&c.href),
                    free: c.free,
                })
                .collect(),
            benefits: catalog
                .benefits
                .iter()
                .map(|b| BenefitEntry {
                    icon: b.icon.clone(),
                    title: js_str(&b.title),
                    description: js_str(&b.description),
                })
                .collect(),
        }
    }
}

/// Context for the resources/glossary page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResourcesContext {
    pub financing_url: String,
    pub financing_label: String,
    pub icon_imports: String,
    pub categories: Vec<CategoryPill>,
    pub terms: Vec<TermEntry>,
}

impl ResourcesContext {
    /// Build the template context from a glossary.
    ///
    /// The pill list is derived from `Category::ALL`, so pill ids always
    /// match the ids records deserialize into.
    pub fn new(financing_url: &str, financing_label: &str, glossary: &Glossary) -> Self {
        let mut icons: Vec<&'static str> = Vec::new();
        for category in Category::ALL {
            if !icons.contains(&category.icon()) {
                icons.push(category.icon());
            }
        }

        Self {
            financing_url: financing_url.to_string(),
            financing_label: financing_label.to_string(),
            icon_imports: icons.join(", "),
            categories: Category::ALL
                .iter()
                .map(|c| CategoryPill {
                    id: js_str(c.id()),
                    label: js_str(c.label()),
                    icon: c.icon().to_string(),
                })
                .collect(),
            terms: glossary
                .terms()
                .iter()
                .map(|t| TermEntry {
                    term: js_str(&t.term),
                    category: js_str(t.category.id()),
                    full: js_str(&t.full),
                    short: js_str(&t.short),
                    detail: js_str(&t.detail),
                })
                .collect(),
        }
    }
}

/// Encode a string as a double-quoted JS string literal.
fn js_str(value: &str) -> String {
    serde_json::to_string(value).expect("Failed to encode JS string literal")
}

/// Encode a slice of strings as a JS array literal.
fn js_str_array(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| js_str(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded page templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Output is TSX source, not HTML; nothing may be entity-escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template_owned("sign-in.tsx".to_string(), SIGN_IN_TEMPLATE.to_string())
            .expect("Failed to add sign-in template");

        env.add_template_owned("product.tsx".to_string(), PRODUCT_TEMPLATE.to_string())
            .expect("Failed to add product template");

        env.add_template_owned("resources.tsx".to_string(), RESOURCES_TEMPLATE.to_string())
            .expect("Failed to add resources template");

        Self { env }
    }

    /// Render the sign-in page source.
    pub fn render_sign_in(&self, ctx: &SignInContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("sign-in.tsx")?;

        tmpl.render(context! {
            brand => &ctx.brand,
            financing_url => &ctx.financing_url,
            financing_label => &ctx.financing_label,
        })
    }

    /// Render the product page source.
    pub fn render_product(&self, ctx: &ProductContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("product.tsx")?;

        tmpl.render(context! {
            calculator_count => ctx.calculator_count,
            icon_imports => &ctx.icon_imports,
            calculators => &ctx.calculators,
            benefits => &ctx.benefits,
        })
    }

    /// Render the resources/glossary page source.
    pub fn render_resources(&self, ctx: &ResourcesContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("resources.tsx")?;

        tmpl.render(context! {
            financing_url => &ctx.financing_url,
            financing_label => &ctx.financing_label,
            icon_imports => &ctx.icon_imports,
            categories => &ctx.categories,
            terms => &ctx.terms,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SIGN_IN_TEMPLATE: &str = r#""use client";
import { signIn } from "next-auth/react";
import { useSearchParams } from "next/navigation";
import { Suspense } from "react";

function SignInContent() {
  const params = useSearchParams();
  const plan = params.get("plan");
  const callbackUrl = plan ? `/app?plan=${plan}` : "/app";

  return (
    <main className="min-h-screen bg-gray-50 flex items-center justify-center px-4">
      <div className="bg-white rounded-2xl shadow-lg border border-gray-200 p-8 w-full max-w-md">
        <div className="text-center mb-8">
          <div className="flex items-center justify-center gap-2 mb-4">
            <div className="h-8 w-8 rounded-lg bg-gradient-to-br from-sgf-green-600 to-sgf-gold-500" />
            <span className="text-xl font-bold text-gray-900">{{ brand }}</span>
          </div>
          <h1 className="text-2xl font-bold text-gray-900 mb-2">Welcome back</h1>
          <p className="text-gray-500 text-sm">Sign in to access your deal workspaces and analysis tools.</p>
        </div>

        {plan && (
          <div className="mb-6 bg-sgf-green-50 border border-sgf-green-200 rounded-xl p-4 text-center">
            <p className="text-sgf-green-700 text-sm font-semibold">
              You selected the <span className="uppercase">{plan}</span> plan
            </p>
            <p className="text-sgf-green-600 text-xs mt-1">Sign in to complete your upgrade</p>
          </div>
        )}

        <button
          onClick={() => signIn("google", { callbackUrl })}
          className="w-full flex items-center justify-center gap-3 bg-white border-2 border-gray-200 rounded-xl px-6 py-3 font-semibold text-gray-700 hover:border-sgf-green-500 hover:bg-sgf-green-50 transition-all"
        >
          <svg className="w-5 h-5" viewBox="0 0 24 24">
            <path fill="#4285F4" d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"/>
            <path fill="#34A853" d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"/>
            <path fill="#FBBC05" d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"/>
            <path fill="#EA4335" d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"/>
          </svg>
          Continue with Google
        </button>

        <p className="text-center text-xs text-gray-400 mt-6">
          By signing in, you agree to our{" "}
          <a href="/terms" className="text-sgf-green-600 hover:underline">Terms</a>{" "}
          and{" "}
          <a href="/privacy" className="text-sgf-green-600 hover:underline">Privacy Policy</a>.
        </p>

        <div className="mt-6 pt-6 border-t border-gray-100 text-center">
          <p className="text-xs text-gray-500">
            Powered by{" "}
            <a href="{{ financing_url }}" target="_blank" rel="noopener noreferrer" className="text-sgf-green-600 font-semibold hover:underline">
              {{ financing_label }}
            </a>
          </p>
        </div>
      </div>
    </main>
  );
}

export default function SignInPage() {
  return (
    <Suspense fallback={<div className="min-h-screen bg-gray-50 flex items-center justify-center"><div className="text-gray-500">Loading...</div></div>}>
      <SignInContent />
    </Suspense>
  );
}
"#;

const PRODUCT_TEMPLATE: &str = r#""use client";
import Link from "next/link";
import { {{ icon_imports }} } from "lucide-react";

const calculators = [
{%- for calc in calculators %}
  {
    icon: {{ calc.icon }}, color: {{ calc.color }},
    name: {{ calc.name }},
    description: {{ calc.description }},
    features: {{ calc.features }},
    href: {{ calc.href }}, free: {{ calc.free }},
  },
{%- endfor %}
];

const benefits = [
{%- for b in benefits %}
  { icon: {{ b.icon }}, title: {{ b.title }}, description: {{ b.description }} },
{%- endfor %}
];

export default function ProductPage() {
  return (
    <main className="bg-gray-50 min-h-screen">
      {/* Hero */}
      <div className="bg-gradient-to-br from-sgf-green-700 to-sgf-green-900 text-white py-20">
        <div className="mx-auto max-w-5xl px-6 text-center">
          <span className="inline-block bg-sgf-gold-500/20 text-sgf-gold-300 text-xs font-bold px-3 py-1 rounded-full mb-4 uppercase tracking-wide">
            Professional Tools
          </span>
          <h1 className="text-4xl md:text-5xl font-bold mb-4">
            Every Tool You Need to<br />Close More Deals
          </h1>
          <p className="text-sgf-green-200 text-lg max-w-2xl mx-auto mb-8">
            {{ calculator_count }} professional calculators built for business brokers, M&A consultants, commercial loan brokers, and real estate investors.
          </p>
          <div className="flex items-center justify-center gap-4">
            <Link href="/sign-in" className="bg-sgf-gold-500 hover:bg-sgf-gold-600 text-white px-6 py-3 rounded-xl font-bold transition-colors">
              Start Free
            </Link>
            <Link href="/pricing" className="bg-white/10 hover:bg-white/20 text-white px-6 py-3 rounded-xl font-bold transition-colors">
              View Pricing
            </Link>
          </div>
        </div>
      </div>

      {/* Benefits */}
      <div className="bg-white border-b border-gray-100 py-12">
        <div className="mx-auto max-w-5xl px-6">
          <div className="grid md:grid-cols-3 gap-8">
            {benefits.map((b) => (
              <div key={b.title} className="text-center">
                <div className="w-12 h-12 bg-sgf-green-100 rounded-xl flex items-center justify-center mx-auto mb-3">
                  <b.icon className="w-6 h-6 text-sgf-green-600" />
                </div>
                <h3 className="font-bold text-gray-900 mb-1">{b.title}</h3>
                <p className="text-sm text-gray-600">{b.description}</p>
              </div>
            ))}
          </div>
        </div>
      </div>

      {/* Calculators Grid */}
      <div className="mx-auto max-w-6xl px-6 py-16">
        <h2 className="text-3xl font-bold text-gray-900 text-center mb-3">All {{ calculator_count }} Calculators</h2>
        <p className="text-gray-600 text-center mb-12">Free tools available without an account. Save and export with a paid plan.</p>

        <div className="grid md:grid-cols-2 lg:grid-cols-3 gap-6 [&>*:last-child:nth-child(3n+1)]:lg:col-start-2">
          {calculators.map((calc) => {
            const Icon = calc.icon;
            return (
              <div key={calc.name} className="bg-white rounded-2xl border border-gray-200 p-6 hover:shadow-md hover:border-sgf-green-300 transition-all group">
                <div className="flex items-start justify-between mb-4">
                  <div className="w-10 h-10 bg-sgf-green-50 rounded-xl flex items-center justify-center group-hover:bg-sgf-green-500 transition-colors">
                    <Icon className="w-5 h-5 text-sgf-green-600 group-hover:text-white transition-colors" />
                  </div>
                  {calc.free ? (
                    <span className="text-xs font-bold bg-sgf-green-100 text-sgf-green-700 px-2 py-1 rounded-full">Free</span>
                  ) : (
                    <span className="text-xs font-bold bg-sgf-gold-100 text-sgf-gold-700 px-2 py-1 rounded-full">Core+</span>
                  )}
                </div>
                <h3 className="font-bold text-gray-900 mb-2">{calc.name}</h3>
                <p className="text-sm text-gray-600 mb-4">{calc.description}</p>
                <ul className="space-y-1 mb-4">
                  {calc.features.map(f => (
                    <li key={f} className="flex items-center gap-2 text-xs text-gray-500">
                      <Check className="w-3 h-3 text-sgf-green-500" />{f}
                    </li>
                  ))}
                </ul>
                <Link href={calc.href} className="flex items-center gap-1 text-sm font-semibold text-sgf-green-600 hover:text-sgf-green-700 group-hover:gap-2 transition-all">
                  Open Calculator <ArrowRight className="w-4 h-4" />
                </Link>
              </div>
            );
          })}
        </div>
      </div>

      {/* CTA */}
      <div className="bg-sgf-green-700 text-white py-16">
        <div className="mx-auto max-w-3xl px-6 text-center">
          <h2 className="text-3xl font-bold mb-4">Ready to analyze your next deal?</h2>
          <p className="text-sgf-green-200 mb-8">Start free, upgrade when you need more. No credit card required.</p>
          <Link href="/sign-in" className="bg-sgf-gold-500 hover:bg-sgf-gold-600 text-white px-8 py-3 rounded-xl font-bold text-lg transition-colors inline-block">
            Get Started Free
          </Link>
        </div>
      </div>
    </main>
  );
}
"#;

const RESOURCES_TEMPLATE: &str = r#""use client";
import { useState } from "react";
import { Search, X, BookOpen, {{ icon_imports }} } from "lucide-react";

const glossary = [
{%- for t in terms %}
  { term: {{ t.term }}, category: {{ t.category }}, full: {{ t.full }},
    short: {{ t.short }},
    detail: {{ t.detail }} },
{%- endfor %}
];

const categories = [
  { id: "all", label: "All Terms", icon: BookOpen },
{%- for c in categories %}
  { id: {{ c.id }}, label: {{ c.label }}, icon: {{ c.icon }} },
{%- endfor %}
];

export default function ResourcesPage() {
  const [search, setSearch] = useState("");
  const [category, setCategory] = useState("all");
  const [selected, setSelected] = useState<typeof glossary[0] | null>(null);

  const filtered = glossary.filter(g => {
    const matchCat = category === "all" || g.category === category;
    const matchSearch = !search ||
      g.term.toLowerCase().includes(search.toLowerCase()) ||
      g.full.toLowerCase().includes(search.toLowerCase()) ||
      g.short.toLowerCase().includes(search.toLowerCase());
    return matchCat && matchSearch;
  });

  return (
    <main className="bg-gray-50 min-h-screen">
      {/* Header */}
      <div className="bg-white border-b border-gray-100 py-12">
        <div className="mx-auto max-w-4xl px-6 text-center">
          <h1 className="text-3xl font-bold text-gray-900 mb-2">Resources & Glossary</h1>
          <p className="text-gray-600">Essential terms for business acquisition, valuation, and commercial financing.</p>
        </div>
      </div>

      <div className="mx-auto max-w-4xl px-6 py-10">
        {/* Search */}
        <div className="relative mb-6">
          <Search className="absolute left-3 top-1/2 -translate-y-1/2 w-4 h-4 text-gray-400" />
          <input
            type="text" value={search} onChange={e => setSearch(e.target.value)}
            placeholder="Search terms..."
            className="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl focus:border-sgf-green-500 focus:outline-none text-sm"
          />
        </div>

        {/* Category Filters */}
        <div className="flex gap-2 mb-8 flex-wrap">
          {categories.map(cat => {
            const Icon = cat.icon;
            return (
              <button key={cat.id} onClick={() => setCategory(cat.id)}
                className={`flex items-center gap-2 px-4 py-2 rounded-full text-sm font-semibold transition-colors ${
                  category === cat.id
                    ? "bg-sgf-green-600 text-white"
                    : "bg-white border border-gray-200 text-gray-600 hover:border-sgf-green-400"
                }`}>
                <Icon className="w-3.5 h-3.5" />{cat.label}
              </button>
            );
          })}
        </div>

        {/* Glossary Grid */}
        <div className="grid md:grid-cols-2 gap-4">
          {filtered.map(term => (
            <button key={term.term} onClick={() => setSelected(term)}
              className="bg-white rounded-xl border border-gray-200 p-5 text-left hover:border-sgf-green-400 hover:shadow-sm transition-all group">
              <div className="flex items-start justify-between mb-2">
                <span className="text-lg font-black text-sgf-green-700 group-hover:text-sgf-green-800">{term.term}</span>
                <span className={`text-xs font-semibold px-2 py-0.5 rounded-full ${
                  term.category === "financing" ? "bg-blue-100 text-blue-700" :
                  term.category === "valuation" ? "bg-purple-100 text-purple-700" :
                  "bg-amber-100 text-amber-700"
                }`}>{term.category}</span>
              </div>
              <p className="text-xs text-gray-500 font-medium mb-1">{term.full}</p>
              <p className="text-sm text-gray-700">{term.short}</p>
              <p className="text-xs text-sgf-green-600 font-semibold mt-2 group-hover:underline">Read more</p>
            </button>
          ))}
        </div>

        {filtered.length === 0 && (
          <div className="text-center py-12 text-gray-500">No terms found for "{search}"</div>
        )}
      </div>

      {/* Term Modal */}
      {selected && (
        <div className="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4" onClick={() => setSelected(null)}>
          <div className="bg-white rounded-2xl shadow-2xl max-w-lg w-full p-6" onClick={e => e.stopPropagation()}>
            <div className="flex items-start justify-between mb-4">
              <div>
                <h2 className="text-2xl font-black text-sgf-green-700">{selected.term}</h2>
                <p className="text-sm text-gray-500 font-medium">{selected.full}</p>
              </div>
              <button onClick={() => setSelected(null)} className="p-1 hover:bg-gray-100 rounded-lg transition-colors">
                <X className="w-5 h-5 text-gray-500" />
              </button>
            </div>
            <p className="text-gray-800 text-sm leading-relaxed mb-4">{selected.detail}</p>
            <div className="bg-sgf-green-50 rounded-xl p-4">
              <p className="text-xs text-sgf-green-700 font-semibold">Need financing for your deal?</p>
              <a href="{{ financing_url }}" target="_blank" rel="noopener noreferrer"
                className="text-xs text-sgf-green-600 hover:underline">
                Contact {{ financing_label }}
              </a>
            </div>
          </div>
        </div>
      )}
    </main>
  );
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sign_in_ctx() -> SignInContext {
        SignInContext {
            brand: "Acquirely".to_string(),
            financing_url: "https://startinggatefinancial.com".to_string(),
            financing_label: "Starting Gate Financial".to_string(),
        }
    }

    #[test]
    fn renders_sign_in_page() {
        let engine = TemplateEngine::new();

        let source = engine.render_sign_in(&sign_in_ctx()).unwrap();

        assert!(source.starts_with("\"use client\";"));
        assert!(source.contains("<span className=\"text-xl font-bold text-gray-900\">Acquirely</span>"));
        assert!(source.contains("Continue with Google"));
        assert!(source.contains("href=\"https://startinggatefinancial.com\""));
        assert!(source.contains("Starting Gate Financial"));
    }

    #[test]
    fn sign_in_keeps_plan_banner() {
        let engine = TemplateEngine::new();

        let source = engine.render_sign_in(&sign_in_ctx()).unwrap();

        assert!(source.contains("const plan = params.get(\"plan\");"));
        assert!(source.contains("You selected the <span className=\"uppercase\">{plan}</span> plan"));
    }

    #[test]
    fn renders_product_page_from_catalog() {
        let engine = TemplateEngine::new();
        let ctx = ProductContext::new(&Catalog::builtin());

        let source = engine.render_product(&ctx).unwrap();

        assert!(source.contains("All 7 Calculators"));
        assert!(source.contains("name: \"DSCR Calculator\""));
        assert!(source.contains("name: \"Commercial Property Analyzer\""));
        assert!(source.contains("features: [\"Loan amortization\", \"Monthly payment breakdown\", \"DSCR benchmarking\"]"));
        assert!(source.contains(">Free</span>"));
        assert!(source.contains(">Core+</span>"));
    }

    #[test]
    fn product_imports_every_icon_once() {
        let engine = TemplateEngine::new();
        let ctx = ProductContext::new(&Catalog::builtin());

        let source = engine.render_product(&ctx).unwrap();

        let import_line = source
            .lines()
            .find(|l| l.contains("lucide-react"))
            .unwrap();
        for icon in ["BarChart3", "DollarSign", "ArrowRight", "Check", "Shield", "Zap", "Users"] {
            assert_eq!(import_line.matches(icon).count(), 1, "{icon}");
        }
    }

    #[test]
    fn renders_resources_page_with_glossary_data() {
        let engine = TemplateEngine::new();
        let glossary = Glossary::builtin();
        let ctx = ResourcesContext::new(
            "https://startinggatefinancial.com",
            "Starting Gate Financial",
            &glossary,
        );

        let source = engine.render_resources(&ctx).unwrap();

        assert!(source.contains("{ term: \"DSCR\", category: \"financing\", full: \"Debt Service Coverage Ratio\","));
        assert!(source.contains("detail: \"DSCR = Net Operating Income / Total Debt Service."));
        assert!(source.contains("{ id: \"all\", label: \"All Terms\", icon: BookOpen },"));
        assert!(source.contains("{ id: \"real-estate\", label: \"Real Estate\", icon: Building2 },"));
    }

    #[test]
    fn resources_page_echoes_search_text_on_no_match() {
        let engine = TemplateEngine::new();
        let ctx = ResourcesContext::new("https://example.com", "Example", &Glossary::builtin());

        let source = engine.render_resources(&ctx).unwrap();

        assert!(source.contains("No terms found for \"{search}\""));
    }

    #[test]
    fn resources_overlay_uses_two_handler_containment() {
        let engine = TemplateEngine::new();
        let ctx = ResourcesContext::new("https://example.com", "Example", &Glossary::builtin());

        let source = engine.render_resources(&ctx).unwrap();

        // Scrim click closes; inner content click must not propagate out.
        assert!(source.contains("onClick={() => setSelected(null)}"));
        assert!(source.contains("onClick={e => e.stopPropagation()}"));
        assert!(source.contains("Contact Example"));
    }

    #[test]
    fn resources_filter_matches_short_fields_only() {
        let engine = TemplateEngine::new();
        let ctx = ResourcesContext::new("https://example.com", "Example", &Glossary::builtin());

        let source = engine.render_resources(&ctx).unwrap();

        assert!(source.contains("g.short.toLowerCase().includes(search.toLowerCase())"));
        assert!(!source.contains("g.detail.toLowerCase()"));
    }

    #[test]
    fn embedded_strings_are_json_escaped() {
        let glossary = Glossary::from_yaml(
            r#"
- term: "Q&D"
  category: "valuation"
  full: "Quick \"and\" Dirty"
  short: "Uses quotes."
  detail: "Line one.\nLine two."
"#,
        )
        .unwrap();

        let engine = TemplateEngine::new();
        let ctx = ResourcesContext::new("https://example.com", "Example", &glossary);
        let source = engine.render_resources(&ctx).unwrap();

        assert!(source.contains(r#"full: "Quick \"and\" Dirty","#));
        assert!(source.contains(r#"detail: "Line one.\nLine two." },"#));
    }
}
