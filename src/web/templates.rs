//! # Demo Page Template
//!
//! One maud template: the dark-card landing page served at `/`. It is
//! purely presentational — a prefilled message input, a "Test API"
//! button that POSTs to the assistant endpoint and pretty-prints the
//! JSON, and a link to `/health`.
//!
//! ```text
//! ┌──────────────── .card ─────────────────┐
//! │        🔥 TCS Marketplace AI Assistant │
//! │   Powered by Sauced HTX — “Get Sauced  │
//! │              With Us”                  │
//! │  [ show me US-made sauces under $25 ]  │
//! │        [Test API]   [Health]           │
//! │  ┌──────────── #out ────────────────┐  │
//! │  │ { "reply": ..., "products": … }  │  │
//! │  └──────────────────────────────────┘  │
//! └────────────────────────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// CSS for the demo page, inlined so `/` needs no static assets.
const STYLE: &str = r#"
body{margin:0;background:#000;color:#fff;font-family:Arial,Helvetica,sans-serif;display:flex;min-height:100vh;align-items:center;justify-content:center}
.card{max-width:760px;width:92%;background:#111;border:1px solid #222;border-radius:16px;padding:28px;box-shadow:0 10px 40px rgba(0,0,0,.4);text-align:center}
h1{margin:6px 0 8px 0;font-size:28px;letter-spacing:.2px}
.tag{opacity:.85}
.row{display:flex;gap:10px;justify-content:center;flex-wrap:wrap;margin-top:16px}
input,button{padding:12px 14px;border-radius:10px;border:1px solid #333;background:#0f0f0f;color:#fff;outline:none}
input{min-width:280px}
button{cursor:pointer}
.ok{border-color:#333}
.cta{background:#ff1a1a;border-color:#ff1a1a;font-weight:700}
pre{background:#0b0b0b;border:1px solid #222;border-radius:10px;padding:14px;text-align:left;overflow:auto;max-height:320px;margin-top:16px;white-space:pre-wrap;word-break:break-word}
a.link{color:#ff4d4d;text-decoration:none}
.small{opacity:.7;font-size:13px;margin-top:8px}
"#;

/// Inline script wiring the "Test API" button to the endpoint.
const SCRIPT: &str = r#"<script>
const out = document.getElementById('out');
document.getElementById('send').onclick = async () => {
  const message = document.getElementById('msg').value.trim();
  out.textContent = 'Sending…';
  try {
    const res = await fetch('/api/tcs-assistant', {
      method: 'POST',
      headers: {'Content-Type':'application/json'},
      body: JSON.stringify({ message })
    });
    const data = await res.json();
    out.textContent = JSON.stringify(data, null, 2);
  } catch (e) {
    out.textContent = 'Error: ' + e.message;
  }
};
</script>"#;

/// Renders the full demo page.
pub fn demo_page() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "TCS Marketplace AI Assistant" }
                meta name="viewport" content="width=device-width, initial-scale=1";
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="card" {
                    h1 { "🔥 TCS Marketplace AI Assistant" }
                    div class="tag" { "Powered by Sauced HTX — “Get Sauced With Us”" }

                    div class="row" {
                        input id="msg" value="show me US-made sauces under $25";
                        button class="cta" id="send" { "Test API" }
                        a class="link" href="/health" target="_blank" {
                            button class="ok" { "Health" }
                        }
                    }

                    pre id="out" { "Click “Test API” to see a live response." }
                    div class="small" {
                        "Docs: POST " code { "/api/tcs-assistant" } " → { message: string }"
                    }
                }
                (PreEscaped(SCRIPT))
            }
        }
    }
}
