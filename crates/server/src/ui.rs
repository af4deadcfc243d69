//! Embedded web UI.
//!
//! A single self-contained page: a skill picker fed by `GET /api/skills`
//! and a results column rendered from `POST /api/recommend`. All logic
//! stays in the API; this page is a thin presentation wrapper.

/// The single-page front end served at `/`.
pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>oficio: orientador ocupacional</title>
<style>
  body {
    font-family: system-ui, sans-serif;
    background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
    margin: 0; padding: 2rem; color: #1e3a5f;
  }
  main { max-width: 720px; margin: 0 auto; }
  h1 { font-size: 1.6rem; }
  select { width: 100%; min-height: 10rem; padding: .5rem; border-radius: 10px; border: 1px solid #ccd; }
  button {
    margin-top: 1rem; width: 100%; padding: 12px 24px; font-size: 1.05rem; font-weight: bold;
    color: #fff; background-color: #4b8bbe; border: none; border-radius: 10px; cursor: pointer;
  }
  button:hover { background-color: #3a6a94; }
  .card {
    background: #fff; border: 1px solid #e6e6e6; border-radius: 15px;
    padding: 20px; margin-top: 1rem; box-shadow: 0 4px 12px rgba(0,0,0,.1);
  }
  .card h3 { margin: 0 0 .4rem; }
  .muted { color: #667; font-size: .9rem; }
  .error { color: #a33; font-weight: bold; }
</style>
</head>
<body>
<main>
  <h1>Orientador ocupacional</h1>
  <p class="muted">Selecciona tus habilidades y descubre las cinco ocupaciones más afines.</p>
  <select id="skills" multiple></select>
  <button id="go">Recomendar</button>
  <div id="results"></div>
</main>
<script>
async function loadSkills() {
  const res = await fetch('/api/skills');
  const data = await res.json();
  const select = document.getElementById('skills');
  for (const label of data.skills) {
    const option = document.createElement('option');
    option.value = label;
    option.textContent = label;
    select.appendChild(option);
  }
}

function card(match) {
  const div = document.createElement('div');
  div.className = 'card';
  const local = match.local
    ? `<p>${match.local.description}</p>
       <p class="muted">${match.local.name} · afinidad ${match.local.affinity.toFixed(2)} · ${match.local.prevalence} registros locales</p>`
    : '<p class="muted">Sin correspondencia en la clasificación local.</p>';
  div.innerHTML = `<h3>${match.title}</h3>${local}`;
  return div;
}

async function recommend() {
  const selected = Array.from(document.getElementById('skills').selectedOptions).map(o => o.value);
  const results = document.getElementById('results');
  results.textContent = '';
  const res = await fetch('/api/recommend', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ skills: selected }),
  });
  const data = await res.json();
  if (!res.ok) {
    const p = document.createElement('p');
    p.className = 'error';
    p.textContent = data.error.message;
    results.appendChild(p);
    return;
  }
  for (const match of data.recommendations) results.appendChild(card(match));
  if (data.dropped.length > 0) {
    const p = document.createElement('p');
    p.className = 'muted';
    p.textContent = 'No reconocidas: ' + data.dropped.join(', ');
    results.appendChild(p);
  }
}

document.getElementById('go').addEventListener('click', recommend);
loadSkills();
</script>
</body>
</html>
"#;
