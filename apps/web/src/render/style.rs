/// Inline stylesheet embedded in the page head.
///
/// `.reveal` is the entrance animation; it is purely cosmetic and switched off for
/// users who prefer reduced motion.
pub const STYLESHEET: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background: #fff; color: #111827; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; line-height: 1.5; }
a { color: inherit; }
.wrap { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
header.hero { padding: 3rem 0 1.5rem; }
header.hero h1 { font-size: 2.25rem; font-weight: 700; letter-spacing: -0.02em; margin: 0; }
.hero .title { margin: 0.5rem 0 0; font-size: 1.125rem; color: #374151; }
.hero .blurb { margin: 0.75rem 0 0; max-width: 48rem; color: #4b5563; }
.hero .location { margin: 0.5rem 0 0; font-size: 0.875rem; color: #6b7280; }
.contacts { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1rem; font-size: 0.875rem; }
.contacts a { display: inline-flex; align-items: center; gap: 0.5rem; text-decoration: underline; }
.contacts a:hover { text-decoration: none; }
.section { padding: 3rem 0; }
.section h2 { font-size: 1.875rem; font-weight: 600; letter-spacing: -0.01em; margin: 0 0 1.5rem; }
.grid { display: grid; gap: 1rem; }
@media (min-width: 640px) { .grid.skills { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 768px) { .grid.projects, .grid.certs { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .grid.skills { grid-template-columns: repeat(3, 1fr); } }
.card { border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.25rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.card h3 { margin: 0 0 0.5rem; font-size: 1rem; font-weight: 600; }
.card.project h3 { font-size: 1.125rem; line-height: 1.25; }
.card p, .card li { font-size: 0.875rem; color: #374151; }
.card .period { color: #6b7280; margin: 0; }
.card ul { padding-left: 1.25rem; list-style: disc; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.chip { display: inline-block; border-radius: 1rem; padding: 0.25rem 0.75rem; font-size: 0.875rem; background: #111827; color: #fff; }
.links { display: flex; flex-wrap: wrap; gap: 0.5rem; padding-top: 0.25rem; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; height: 2rem; padding: 0 0.875rem; border: 1px solid #d1d5db; border-radius: 1rem; font-size: 0.875rem; text-decoration: none; }
.btn:hover { background: #f3f4f6; }
.icon { flex-shrink: 0; }
.badge { max-height: 4rem; margin-bottom: 0.5rem; }
footer.site-footer { padding: 1rem 0 3rem; font-size: 0.875rem; color: #6b7280; }
@keyframes reveal-up { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: translateY(0); } }
.reveal { animation: reveal-up 0.35s ease-out both; }
header.hero .reveal { animation-duration: 0.4s; }
@media (prefers-reduced-motion: reduce) { .reveal { animation: none; } }
"#;
