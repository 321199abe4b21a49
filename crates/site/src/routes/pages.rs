//! Tenant pages
//!
//! Server-rendered HTML for the home, events and about pages. Every page is
//! themed and titled from the tenant resolved for the request; when no
//! tenant is available a plain "Tenant not found" page is rendered instead.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, NaiveDate, Utc};

use steeple_shared::{Event, TenantRecord};

use crate::{routing::RequestTenant, state::AppState};

/// Pages are shared-cacheable for a minute, keyed by host
const PAGE_CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=300";

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

pub async fn home(tenant: RequestTenant) -> Response {
    let Some(tenant) = tenant.current_tenant() else {
        return tenant_not_found();
    };

    let name = html_escape(&tenant.name);
    let content = format!(
        r#"<section class="hero">
  <h1>Bem-vindo à {name}</h1>
  <p>Uma comunidade de fé, esperança e amor. Junte-se a nós!</p>
  <div class="actions">
    <a class="button" href="/events">Ver Eventos</a>
    <a class="button outline" href="/about">Sobre Nós</a>
  </div>
</section>
<section class="blocks">
  <div class="block"><h3>Cultos</h3><p>Momentos de adoração e comunhão com encontros semanais</p></div>
  <div class="block"><h3>Comunidade</h3><p>Conecte-se com pessoas que compartilham dos mesmos valores</p></div>
  <div class="block"><h3>Ensino</h3><p>Estudo bíblico aprofundado e aplicação prática para a vida</p></div>
</section>
<section class="cta">
  <h2>Faça Parte da Nossa Comunidade</h2>
  <p>Venha nos visitar e descubra como podemos crescer juntos na fé</p>
  <a class="button" href="/events">Conheça Nossos Eventos</a>
</section>"#
    );

    page(tenant, &content)
}

pub async fn events(State(state): State<AppState>, tenant: RequestTenant) -> Response {
    let Some(tenant) = tenant.current_tenant() else {
        return tenant_not_found();
    };

    let events = state.events.for_church(&tenant.church_id);
    let listing = if events.is_empty() {
        r#"<div class="empty"><p>Nenhum evento agendado no momento.</p></div>"#.to_string()
    } else {
        let cards: String = events.iter().map(event_card).collect();
        format!(r#"<div class="events">{cards}</div>"#)
    };

    let content = format!(
        r#"<section class="page-header">
  <h1>Próximos Eventos</h1>
  <p>Confira nossa programação e participe dos nossos eventos</p>
</section>
{listing}"#
    );

    page(tenant, &content)
}

pub async fn about(tenant: RequestTenant) -> Response {
    let Some(tenant) = tenant.current_tenant() else {
        return tenant_not_found();
    };

    let name = html_escape(&tenant.name);
    let church_id = html_escape(&tenant.church_id);
    let content = format!(
        r#"<section class="hero">
  <h1>Sobre a {name}</h1>
  <p>Conheça nossa história, missão e valores</p>
</section>
<section class="prose">
  <h2>Nossa História</h2>
  <p>A {name} nasceu do desejo de criar uma comunidade acolhedora onde pessoas de todas as idades e origens pudessem se conectar com Deus e uns com os outros.</p>
  <h2>Missão</h2>
  <p>Nossa missão é compartilhar o evangelho de forma relevante e autêntica, equipando cada pessoa para viver uma vida de propósito e significado.</p>
  <h2>Valores</h2>
  <ul class="values">
    <li><strong>Amor</strong> Demonstramos amor incondicional e acolhemos a todos sem distinção</li>
    <li><strong>Adoração</strong> Cultivamos uma vida de adoração genuína e comunhão com Deus</li>
    <li><strong>Ensino</strong> Valorizamos o estudo e ensino da Palavra com excelência e relevância</li>
    <li><strong>Comunidade</strong> Fomentamos relacionamentos autênticos e apoio mútuo</li>
  </ul>
  <div class="technical">
    <p><strong>Identificador técnico:</strong> {church_id}</p>
    <p>Este site faz parte da plataforma multi-tenant e é personalizado especialmente para a {name}</p>
  </div>
</section>"#
    );

    page(tenant, &content)
}

fn event_card(event: &Event) -> String {
    format!(
        r#"<article class="event" id="{id}">
  <h3>{title}</h3>
  <p>{description}</p>
  <ul>
    <li class="date">{date}</li>
    <li class="time">{time}</li>
    <li class="location">{location}</li>
  </ul>
</article>"#,
        id = html_escape(&event.id),
        title = html_escape(&event.title),
        description = html_escape(&event.description),
        date = format_date_pt_br(event.date),
        time = html_escape(&event.time),
        location = html_escape(&event.location),
    )
}

/// Wrap page content in the tenant layout and attach cache headers
fn page(tenant: &TenantRecord, content: &str) -> Response {
    (
        [
            (header::CACHE_CONTROL, PAGE_CACHE_CONTROL),
            (header::VARY, "Host"),
        ],
        Html(layout(tenant, content)),
    )
        .into_response()
}

fn layout(tenant: &TenantRecord, content: &str) -> String {
    let title = html_escape(&tenant.seo.title);
    let description = html_escape(&tenant.seo.description);
    let og_image = tenant
        .seo
        .og_image
        .as_deref()
        .map(|image| format!(r#"<meta property="og:image" content="{}">"#, html_escape(image)))
        .unwrap_or_default();
    let name = html_escape(&tenant.name);

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <meta property="og:title" content="{title}">
  <meta property="og:description" content="{description}">
  {og_image}
  <link rel="stylesheet" href="/static/site.css">
</head>
<body style="--primary: {primary}; --secondary: {secondary};">
  <header>
    <div class="brand">
      <img src="{logo}" alt="{name} logo" width="40" height="40">
      <h1>{name}</h1>
    </div>
    <nav>
      <a href="/">Início</a>
      <a href="/events">Eventos</a>
      <a href="/about">Sobre</a>
    </nav>
  </header>
  <main>
{content}
  </main>
  <footer>
    <p>&copy; {year} {name}. Todos os direitos reservados.</p>
    <p class="meta">Plataforma Multi-Tenant • churchId: {church_id}</p>
  </footer>
</body>
</html>"#,
        primary = html_escape(&tenant.theme.primary),
        secondary = html_escape(tenant.theme.secondary_or_primary()),
        logo = html_escape(&tenant.theme.logo),
        year = Utc::now().year(),
        church_id = html_escape(&tenant.church_id),
    )
}

/// Fallback page when the request carries no (known) tenant
fn tenant_not_found() -> Response {
    tracing::warn!("Page requested without a resolved tenant");
    Html(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Not Found</title><meta name="description" content="Tenant not found"></head>
<body>Tenant not found</body>
</html>"#,
    )
    .into_response()
}

/// "01 de dezembro de 2025"
fn format_date_pt_br(date: NaiveDate) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{:02} de {} de {}", date.day(), month, date.year())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
