//! Global CSS styles for the greeting card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACE */
  --cream: #fff8f0;
  --paper: #fffdf9;
  --shadow: rgba(80, 30, 40, 0.18);

  /* ROSE (Titles, video tiles, close button) */
  --rose: #e85d75;
  --rose-deep: #b83b55;

  /* GOLD (Highlights, playing indicator) */
  --gold: #f2b134;

  /* TEXT */
  --text-primary: #3a2a2e;
  --text-muted: rgba(58, 42, 46, 0.6);

  /* OVERLAY */
  --backdrop: rgba(20, 10, 15, 0.72);

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Nunito', 'Segoe UI', Helvetica, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: linear-gradient(160deg, #ffe3e8 0%, var(--cream) 60%);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

/* === Page === */
.card-page {
  max-width: 880px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem 4rem;
  outline: none;
}

.card-header {
  text-align: center;
  margin-bottom: 2rem;
}

.card-title {
  font-family: var(--font-serif);
  font-size: 3rem;
  color: var(--rose);
}

.card-subtitle {
  color: var(--text-muted);
  font-style: italic;
  margin-top: 0.5rem;
}

.card-missing {
  padding: 3rem;
  text-align: center;
  color: var(--rose-deep);
}

/* === Music Player === */
.music-player {
  background: var(--paper);
  border-radius: 14px;
  box-shadow: 0 4px 18px var(--shadow);
  padding: 1rem 1.25rem;
  margin-bottom: 2rem;
}

.birthday-song {
  width: 100%;
}

.music-player-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 0.75rem;
}

.song-select {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.song-select-label {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.song-select-input {
  border: 1px solid var(--rose);
  border-radius: 8px;
  padding: 0.35rem 0.6rem;
  background: var(--paper);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

.music-status {
  font-size: 0.8rem;
  letter-spacing: 0.04em;
}

.music-status.playing { color: var(--gold); }
.music-status.paused { color: var(--text-muted); }
.music-status.waiting { color: var(--rose-deep); }

.now-playing {
  margin-top: 0.5rem;
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Message Wall === */
.message-container {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.message-wall-empty {
  text-align: center;
  color: var(--text-muted);
}

.message-tile {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1.1rem 1rem;
  background: var(--paper);
  border-radius: 12px;
  box-shadow: 0 2px 10px var(--shadow);
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.message-tile:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 18px var(--shadow);
}

.message-tile.video-card {
  border-left: 4px solid var(--rose);
}

.message-tile.image-card {
  border-left: 4px solid var(--gold);
}

.tile-icon {
  font-size: 1.25rem;
}

/* === Modal === */
.modal {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 100;
  background: var(--backdrop);
  overflow-y: auto;
}

.modal-content {
  position: relative;
  max-width: 720px;
  margin: 8vh auto;
  padding: 2.25rem 1.75rem 1.75rem;
  background: var(--paper);
  border-radius: 16px;
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.35);
}

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
}

.close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.9rem;
  font-size: 2rem;
  line-height: 1;
  color: var(--rose);
  transition: color var(--transition-fast);
}

.close-btn:hover {
  color: var(--rose-deep);
}

.modal-video {
  max-width: 100%;
  border-radius: 10px;
}

.modal-image {
  max-width: 100%;
  max-height: 70vh;
  border-radius: 10px;
  display: block;
  margin: 0 auto 15px auto;
}

.card-markdown {
  font-size: 1.1rem;
  line-height: 1.6;
}

.card-markdown p + p {
  margin-top: 0.75rem;
}
"#;
