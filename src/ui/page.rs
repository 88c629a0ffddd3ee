//! Gallery Page Shell
//!
//! The whole front end is one self-contained HTML document. It fetches
//! the current view from `/api/gallery`, posts control changes to
//! `/api/event`, and redraws itself from the returned view.

/// Served for `GET /` - embedded so the binary needs no asset directory.
pub const GALLERY_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>imgrid</title>
<style>
  * { box-sizing: border-box; }
  body { margin: 0; display: flex; height: 100vh; font-family: system-ui, sans-serif; }
  #sidebar { width: 220px; flex-shrink: 0; background: #212529; color: #f8f9fa; padding: 1rem; }
  #sidebar h1 { font-size: 1.4rem; margin: 0 0 .5rem; }
  #sidebar hr { border: none; border-top: 1px solid #495057; }
  #sidebar label { display: block; margin: 1rem 0 .25rem; font-size: .9rem; }
  #sidebar input, #sidebar select { width: 100%; padding: .3rem; }
  #sidebar button { margin-top: 1.25rem; width: 100%; padding: .4rem; cursor: pointer; }
  #gallery { flex-grow: 1; overflow-y: auto; padding: 1rem; }
  #filters { display: flex; gap: .5rem; margin-bottom: 1rem; }
  .filter-cell { flex: 1 1 0; }
  .filter-cell input { width: 100%; padding: .3rem; }
  .filter-cell .results { font-size: .8rem; color: #6c757d; margin-top: .15rem; }
  .grid-row { display: flex; gap: .5rem; margin-bottom: .5rem; }
  .grid-cell { flex: 1 1 0; min-width: 0; }
  .grid-cell figure { margin: 0; }
  .grid-cell figcaption { font-size: .75rem; color: #6c757d; word-break: break-all; }
  .grid-cell img { max-width: 100%; display: block; }
  #pagination { display: flex; justify-content: center; gap: .25rem; margin: 1rem 0; }
  #pagination button { min-width: 2rem; padding: .3rem .5rem; cursor: pointer; }
  #pagination button.active { background: #0d6efd; color: #fff; border-color: #0d6efd; }
  #pagination .gap { align-self: center; color: #6c757d; }
</style>
</head>
<body>
<nav id="sidebar">
  <h1>imgrid</h1>
  <hr>
  <label for="num-columns">Columns</label>
  <input id="num-columns" type="number" min="1" max="8" step="1" value="2">
  <label for="page-size">Images per page</label>
  <select id="page-size"></select>
  <button id="refresh" type="button">Refresh</button>
</nav>
<main id="gallery">
  <div id="filters"></div>
  <div id="images"></div>
  <div id="pagination"></div>
</main>
<script>
"use strict";

const columnsInput = document.getElementById("num-columns");
const pageSizeSelect = document.getElementById("page-size");
const refreshButton = document.getElementById("refresh");
const filtersDiv = document.getElementById("filters");
const imagesDiv = document.getElementById("images");
const paginationDiv = document.getElementById("pagination");
const galleryDiv = document.getElementById("gallery");

const debounceTimers = {};

async function sendEvent(event) {
  const response = await fetch("/api/event", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(event),
  });
  if (!response.ok) {
    return;
  }
  render(await response.json());
  if (event.type === "set_page") {
    galleryDiv.scrollTo(0, 0);
  }
}

function renderControls(view) {
  columnsInput.max = view.max_columns;
  if (document.activeElement !== columnsInput) {
    columnsInput.value = view.columns.length;
  }
  if (pageSizeSelect.options.length !== view.page.sizes.length) {
    pageSizeSelect.innerHTML = "";
    for (const size of view.page.sizes) {
      const option = document.createElement("option");
      option.value = size;
      option.textContent = size;
      pageSizeSelect.appendChild(option);
    }
  }
  pageSizeSelect.value = view.page.size;
}

function renderFilters(view) {
  if (filtersDiv.children.length !== view.columns.length) {
    filtersDiv.innerHTML = "";
    for (const column of view.columns) {
      const cell = document.createElement("div");
      cell.className = "filter-cell";
      const input = document.createElement("input");
      input.type = "text";
      input.placeholder = 'Filter e.g. "output_*.jpg"';
      input.addEventListener("input", () => {
        clearTimeout(debounceTimers[column.index]);
        debounceTimers[column.index] = setTimeout(() => {
          sendEvent({ type: "set_pattern", index: column.index, pattern: input.value });
        }, 250);
      });
      const results = document.createElement("div");
      results.className = "results";
      cell.appendChild(input);
      cell.appendChild(results);
      filtersDiv.appendChild(cell);
    }
  }
  view.columns.forEach((column, i) => {
    const cell = filtersDiv.children[i];
    const input = cell.querySelector("input");
    if (document.activeElement !== input) {
      input.value = column.pattern;
    }
    cell.querySelector(".results").textContent = column.results_label;
  });
}

function renderImages(view) {
  imagesDiv.innerHTML = "";
  for (const row of view.rows) {
    const rowDiv = document.createElement("div");
    rowDiv.className = "grid-row";
    for (const cell of row) {
      const cellDiv = document.createElement("div");
      cellDiv.className = "grid-cell";
      if (cell) {
        const figure = document.createElement("figure");
        const caption = document.createElement("figcaption");
        caption.textContent = cell.caption;
        const img = document.createElement("img");
        img.src = cell.src;
        img.loading = "lazy";
        figure.appendChild(caption);
        figure.appendChild(img);
        cellDiv.appendChild(figure);
      }
      rowDiv.appendChild(cellDiv);
    }
    imagesDiv.appendChild(rowDiv);
  }
}

function pageButton(label, page, options) {
  const button = document.createElement("button");
  button.type = "button";
  button.textContent = label;
  if (options && options.active) {
    button.className = "active";
  }
  if (options && options.disabled) {
    button.disabled = true;
  } else {
    button.addEventListener("click", () => sendEvent({ type: "set_page", page: page }));
  }
  return button;
}

function renderPagination(view) {
  paginationDiv.innerHTML = "";
  const active = view.page.active;
  const count = view.page.count;
  if (count <= 1) {
    return;
  }
  paginationDiv.appendChild(pageButton("«", 1, { disabled: active === 1 }));
  paginationDiv.appendChild(pageButton("‹", active - 1, { disabled: active === 1 }));
  let previous = 0;
  for (let page = 1; page <= count; page++) {
    if (page !== 1 && page !== count && Math.abs(page - active) > 2) {
      continue;
    }
    if (page - previous > 1) {
      const gap = document.createElement("span");
      gap.className = "gap";
      gap.textContent = "…";
      paginationDiv.appendChild(gap);
    }
    paginationDiv.appendChild(pageButton(page, page, { active: page === active }));
    previous = page;
  }
  paginationDiv.appendChild(pageButton("›", active + 1, { disabled: active === count }));
  paginationDiv.appendChild(pageButton("»", count, { disabled: active === count }));
}

function render(view) {
  renderControls(view);
  renderFilters(view);
  renderImages(view);
  renderPagination(view);
}

columnsInput.addEventListener("change", () => {
  sendEvent({ type: "set_columns", count: Number(columnsInput.value) });
});
pageSizeSelect.addEventListener("change", () => {
  sendEvent({ type: "set_page_size", size: Number(pageSizeSelect.value) });
});
refreshButton.addEventListener("click", () => sendEvent({ type: "refresh" }));

async function load() {
  const response = await fetch("/api/gallery");
  render(await response.json());
}

load();
</script>
</body>
</html>
"#;
