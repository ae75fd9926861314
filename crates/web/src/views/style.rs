//! Site stylesheet, inlined into every page.

pub const STYLESHEET: &str = r#"
:root {
  --brand-dark: #3C2913;
  --brand-warm: #A15B43;
  --brand-accent: #E2B44D;
  --brand-light: #F0EDDD;
  --mustard: #DAA520;
  --mustard-hover: #c8961e;
  --cta-bg: #f4ebe0;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: "Nunito Sans", sans-serif; color: var(--brand-dark); }
h1, h2, h3 { font-family: "Crimson Pro", serif; font-weight: 400; }
a { color: inherit; text-decoration: none; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
.site-header { padding: 1.5rem 0; }
.site-header .container { display: flex; justify-content: space-between; align-items: center; }
.logo { font-family: "Crimson Pro", serif; font-size: 1.75rem; color: var(--brand-warm); }
.nav { display: flex; gap: 2rem; align-items: center; }
.nav a:hover { color: var(--brand-warm); }
.site-footer { padding: 2rem 0; background: var(--brand-light); font-size: .875rem; }
.section { padding: 4rem 0; }
.grid-2 { display: grid; grid-template-columns: 1fr; gap: 3rem; align-items: center; }
@media (min-width: 1024px) { .grid-2 { grid-template-columns: 1fr 1fr; } }
.reverse > :first-child { order: 2; }
.cover { width: 100%; height: 100%; object-fit: cover; border-radius: .5rem; }
.hero-image { min-height: 24rem; }
.square { width: 20rem; height: 20rem; }
.portrait { width: 12rem; height: 12rem; margin: 0 auto 1.5rem; }
.title { color: var(--brand-warm); font-size: 2.5rem; }
.center { text-align: center; }
.bg-light { background: var(--brand-light); }
.bg-warm { background: var(--brand-warm); color: #fff; }
.bg-warm h2 { color: #fff; }
.btn { display: inline-block; padding: .75rem 2rem; font-weight: 600; transition: background-color .2s; }
.btn-line { border: 2px solid var(--brand-warm); color: var(--brand-warm); }
.btn-line:hover { background: var(--brand-warm); color: #fff; }
.btn-fill { background: var(--mustard); color: #fff; }
.btn-outline { border: 1px solid var(--mustard); color: var(--mustard); }
.btn-fill:hover, .btn-outline:hover { background: var(--mustard-hover); color: #fff; }
.cta { background: var(--cta-bg); padding: 4rem 0; text-align: center; }
.cta .buttons { display: flex; justify-content: center; gap: 1rem; }
.bullets { list-style: none; padding: 0; }
.bullets li::before { content: ""; display: inline-block; width: .5rem; height: .5rem; margin-right: .75rem; border-radius: 50%; background: var(--brand-warm); }
.team { display: flex; flex-wrap: wrap; justify-content: center; gap: 4rem; }
.member { max-width: 24rem; text-align: center; }
.member .role { color: var(--brand-warm); font-weight: 500; }
.age { color: var(--brand-warm); font-weight: 600; }
.schedule { width: 100%; border-collapse: collapse; }
.schedule td { padding: .5rem 0; border-bottom: 1px solid var(--brand-light); }
.contact-form { display: grid; gap: 1rem; }
.contact-form input, .contact-form textarea { padding: .75rem; border: 1px solid var(--brand-dark); font: inherit; }
.unavailable { display: flex; min-height: 60vh; align-items: center; justify-content: center; }
"#;
