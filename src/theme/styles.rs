//! Global CSS styles for Storyboard.
//!
//! Dark editor palette; thumbnails are fixed squares in a wrapping row.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #0f1115;
  --surface-raised: #171a21;
  --surface-border: #262a33;

  /* ACCENT */
  --primary: #c9a45c;
  --primary-soft: rgba(201, 164, 92, 0.3);
  --primary-faint: rgba(201, 164, 92, 0.5);

  /* TEXT */
  --text-primary: #f2f2f2;
  --text-muted: rgba(242, 242, 242, 0.55);

  /* SEMANTIC */
  --danger: #e5484d;
  --danger-soft: rgba(229, 72, 77, 0.8);
  --warning: #f5a524;

  /* Typography */
  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Cormorant Garamond', Georgia, serif;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 200ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === App Shell === */
.storyboard {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.storyboard__header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.storyboard__title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--primary);
}

.storyboard__count {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Upload Trigger === */
.image-upload {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.image-upload-btn {
  width: 100%;
  padding: 2rem 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-family: var(--font-body);
  font-size: var(--text-base);
  color: var(--text-primary);
  background: rgba(23, 26, 33, 0.5);
  backdrop-filter: blur(4px);
  border: 2px dashed var(--primary-faint);
  border-radius: 8px;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.image-upload-btn:hover {
  border-color: var(--primary);
}

.image-upload-btn__icon {
  font-size: 1.25rem;
}

.image-upload__board {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.image-upload__hint {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Thumbnail List === */
.sortable-list {
  display: flex;
  flex-wrap: wrap;
  touch-action: none;
  user-select: none;
}

.sortable-image {
  position: relative;
  flex: none;
  cursor: move;
  border-radius: 8px;
  outline: none;
}

.sortable-image:focus-visible {
  box-shadow: 0 0 0 2px var(--primary);
}

.sortable-image--dragging {
  z-index: 10;
  cursor: grabbing;
  opacity: 0.9;
}

.sortable-image__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 8px;
  border: 2px solid var(--primary-soft);
  transition: border-color var(--transition-normal);
  pointer-events: none;
}

.sortable-image:hover .sortable-image__img,
.sortable-image--dragging .sortable-image__img {
  border-color: var(--primary);
}

.sortable-image__remove {
  position: absolute;
  top: -0.5rem;
  right: -0.5rem;
  width: 1.5rem;
  height: 1.5rem;
  border: none;
  border-radius: 50%;
  background: var(--danger);
  color: var(--text-primary);
  font-size: 1rem;
  line-height: 1;
  cursor: pointer;
  opacity: 0;
  transition: opacity var(--transition-fast), background var(--transition-fast);
}

.sortable-image:hover .sortable-image__remove,
.sortable-image:focus-within .sortable-image__remove {
  opacity: 1;
}

.sortable-image__remove:hover {
  background: var(--danger-soft);
}

.sortable-list--dragging .sortable-image__remove {
  opacity: 0;
}

/* === Upload Notice === */
.upload-notice {
  padding: 0.75rem 1rem;
  border: 1px solid var(--warning);
  border-radius: 6px;
  background: rgba(245, 165, 36, 0.08);
  font-size: var(--text-sm);
}

.upload-notice__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.upload-notice__title {
  color: var(--warning);
}

.upload-notice__dismiss {
  border: none;
  background: transparent;
  color: var(--text-muted);
  font-size: 1.125rem;
  cursor: pointer;
}

.upload-notice__dismiss:hover {
  color: var(--text-primary);
}

.upload-notice__list {
  margin-top: 0.5rem;
  padding-left: 1.25rem;
  color: var(--text-muted);
}
"#;
