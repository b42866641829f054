//! Control panel page - upload form, file list, and storage gauge.

use axum::extract::State;
use axum::response::Html;

use crate::server::AppState;

/// Renders the control panel.
///
/// The page is self-contained: styles and scripts are inlined, and the file
/// list is populated client-side from `/api/files`. The storage ceiling
/// shown by the gauge comes from configuration and is informational only.
pub async fn control_panel(State(state): State<AppState>) -> Html<String> {
    let max_mb = state.config.server.max_storage_bytes as f64 / (1024.0 * 1024.0);

    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Drydock Control Panel</title>
<style>
  body {{ font-family: system-ui, sans-serif; background: #10151c; color: #dce3ea; margin: 0; }}
  main {{ max-width: 720px; margin: 2rem auto; padding: 0 1rem; }}
  h1 {{ font-size: 1.4rem; border-bottom: 1px solid #2a3442; padding-bottom: 0.5rem; }}
  section {{ background: #1a212b; border: 1px solid #2a3442; border-radius: 8px; padding: 1rem; margin-bottom: 1.25rem; }}
  label {{ display: block; margin: 0.5rem 0 0.25rem; color: #9fb0c0; font-size: 0.85rem; }}
  select, input[type=file] {{ width: 100%; padding: 0.4rem; background: #10151c; color: #dce3ea; border: 1px solid #2a3442; border-radius: 4px; }}
  button {{ margin-top: 0.75rem; padding: 0.45rem 1.1rem; background: #2d6cdf; color: #fff; border: 0; border-radius: 4px; cursor: pointer; }}
  button:hover {{ background: #3a7cf0; }}
  .gauge {{ height: 10px; background: #2a3442; border-radius: 5px; overflow: hidden; }}
  .gauge-fill {{ height: 100%; background: #2d6cdf; width: 0; transition: width 0.4s; }}
  .progress {{ height: 6px; background: #2a3442; border-radius: 3px; overflow: hidden; margin-top: 0.5rem; display: none; }}
  .progress-fill {{ height: 100%; background: #35b06f; width: 0; }}
  ul {{ list-style: none; padding: 0; margin: 0; }}
  li {{ display: flex; justify-content: space-between; align-items: center; padding: 0.4rem 0; border-bottom: 1px solid #222b36; }}
  li a {{ color: #6fa8ff; text-decoration: none; margin-right: 0.75rem; }}
  li button {{ margin: 0; padding: 0.2rem 0.6rem; background: #b03535; }}
  li button:hover {{ background: #c94444; }}
  #status {{ min-height: 1.2rem; font-size: 0.85rem; margin-top: 0.5rem; }}
  #status.error {{ color: #ff7b7b; }}
  #status.ok {{ color: #7bd89b; }}
</style>
</head>
<body>
<main>
  <h1>Drydock Control Panel</h1>

  <section>
    <h2>Upload asset</h2>
    <form id="upload-form">
      <label for="file">File</label>
      <input type="file" id="file" name="file">
      <label for="file_type">Asset type</label>
      <select id="file_type" name="file_type">
        <option value="html">HTML page</option>
        <option value="css">Stylesheet</option>
        <option value="js">Script</option>
        <option value="images">Image</option>
      </select>
      <button type="submit">Upload</button>
      <div class="progress" id="progress"><div class="progress-fill" id="progress-fill"></div></div>
      <div id="status"></div>
    </form>
  </section>

  <section>
    <h2>Storage</h2>
    <div class="gauge"><div class="gauge-fill" id="gauge-fill"></div></div>
    <p id="storage-text">Loading...</p>
  </section>

  <section>
    <h2>Files</h2>
    <ul id="file-list"></ul>
  </section>
</main>

<script>
const MAX_MB = {max_mb:.0};

async function refresh() {{
  const response = await fetch('/api/files');
  const data = await response.json();

  const list = document.getElementById('file-list');
  list.innerHTML = '';
  for (const file of data.files) {{
    const item = document.createElement('li');
    const name = file.split('/').pop();
    const link = document.createElement('a');
    link.href = '/' + name;
    link.textContent = file;
    link.target = '_blank';
    const remove = document.createElement('button');
    remove.textContent = 'Delete';
    remove.onclick = () => deleteFile(file);
    item.appendChild(link);
    item.appendChild(remove);
    list.appendChild(item);
  }}

  const used = data.storage_info.total_size_mb;
  const percent = Math.min(100, used / MAX_MB * 100);
  document.getElementById('gauge-fill').style.width = percent + '%';
  document.getElementById('storage-text').textContent =
    used.toFixed(2) + ' MB of ' + MAX_MB + ' MB used, ' +
    data.storage_info.file_count + ' files';
}}

async function deleteFile(path) {{
  const response = await fetch('/api/delete/' + path, {{ method: 'DELETE' }});
  const data = await response.json();
  setStatus(data.message, data.status !== 'success');
  refresh();
}}

function setStatus(message, isError) {{
  const status = document.getElementById('status');
  status.textContent = message;
  status.className = isError ? 'error' : 'ok';
}}

document.getElementById('upload-form').addEventListener('submit', async (event) => {{
  event.preventDefault();
  const input = document.getElementById('file');
  const form = new FormData();
  if (input.files.length > 0) {{
    form.append('file', input.files[0]);
  }}
  form.append('file_type', document.getElementById('file_type').value);

  const progress = document.getElementById('progress');
  const fill = document.getElementById('progress-fill');
  progress.style.display = 'block';
  fill.style.width = '0%';
  let simulated = 0;
  const ticker = setInterval(() => {{
    simulated = Math.min(90, simulated + 15);
    fill.style.width = simulated + '%';
  }}, 80);

  try {{
    const response = await fetch('/upload', {{ method: 'POST', body: form }});
    const data = await response.json();
    if (data.status === 'success') {{
      setStatus('Uploaded ' + data.filepath, false);
    }} else {{
      setStatus(data.message, true);
    }}
  }} catch (error) {{
    setStatus('Upload failed: ' + error, true);
  }} finally {{
    clearInterval(ticker);
    fill.style.width = '100%';
    setTimeout(() => {{ progress.style.display = 'none'; }}, 400);
    input.value = '';
    refresh();
  }}
}});

refresh();
</script>
</body>
</html>"#
    );

    Html(page)
}

#[cfg(test)]
mod tests {
    use drydock_core::DrydockConfig;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_panel_renders_with_configured_ceiling() {
        let temp = TempDir::new().unwrap();
        let state = AppState::new(DrydockConfig::for_testing(temp.path()));

        let Html(page) = control_panel(State(state)).await;

        assert!(page.contains("Drydock Control Panel"));
        assert!(page.contains("const MAX_MB = 100;"));
        assert!(page.contains("/api/files"));
        assert!(page.contains("/upload"));
        assert!(page.contains("/api/delete/"));
    }
}
