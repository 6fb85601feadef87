//! Global CSS styles for Mash Portfolio.
//!
//! Black canvas, white type, generous spacing.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --canvas: #000000;
  --surface: #1f2937;
  --surface-hover: #374151;

  --text-primary: #ffffff;
  --text-tertiary: #a3a3a3;

  --font-sans: 'Roboto', 'Geist', system-ui, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease-in-out;
  --transition-reveal: 600ms ease-out;
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
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--canvas);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

img, video {
  max-width: 100%;
  height: auto;
  display: block;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

button:disabled {
  opacity: 0.3;
  cursor: default;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* === Header === */
.site-header {
  display: flex;
  justify-content: center;
  padding: 2.5rem 1rem;
  transition: opacity var(--transition-normal);
}

.site-header.suppressed {
  opacity: 0.3;
  pointer-events: none;
}

.site-header__inner {
  width: 100%;
  max-width: 1200px;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.site-nav ul {
  display: flex;
  align-items: center;
  gap: 2rem;
  list-style: none;
}

.site-nav__link {
  color: var(--text-tertiary);
  padding: 0.5rem 0;
  transition: color var(--transition-fast);
}

.site-nav__link:hover,
.site-nav__link.active {
  color: var(--text-primary);
}

.site-nav__dropdown {
  position: relative;
}

.site-nav__menu {
  position: absolute;
  left: 0;
  top: 100%;
  width: 12rem;
  background: var(--surface);
  border-radius: 0.375rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
  padding: 0.5rem;
  z-index: 10;
}

.site-nav__item {
  display: block;
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
  color: var(--text-tertiary);
  border-radius: 0.375rem;
}

.site-nav__item:hover {
  background: var(--surface-hover);
  color: var(--text-primary);
}

@media (max-width: 640px) {
  .site-nav { display: none; }
}

/* === Back Button === */
.back {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  margin: 1rem 0;
  padding: 0.5rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

/* === Home === */
.backdrop {
  padding-top: 2.5rem;
  text-align: center;
}

.hero h1 {
  font-size: clamp(3rem, 10vw, 7rem);
  font-weight: 100;
  letter-spacing: 0.3em;
  animation: drop-in 500ms ease-out both;
}

.hero__credits {
  display: flex;
  flex-direction: column;
  align-items: center;
  letter-spacing: 0.2em;
}

.section {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding-bottom: 2.5rem;
}

.section__title {
  padding-top: 5rem;
  text-transform: uppercase;
}

.section__rule {
  width: 100%;
  height: 1px;
  background: var(--text-primary);
  margin-bottom: 2.5rem;
}

.category-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.category-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  overflow: hidden;
}

.category-card img {
  transition: transform var(--transition-normal);
}

.category-card:hover img {
  transform: scale(1.05);
}

.info__dots {
  display: flex;
  gap: 1rem;
  margin-bottom: 2.5rem;
}

.info__about {
  width: 75%;
  text-align: center;
}

.info__contact {
  margin-top: 2.5rem;
  text-align: center;
}

.info__instagram {
  margin: 2.5rem 0;
}

.chevron-up {
  display: block;
  margin: 0 auto 2.5rem;
  transform: rotate(180deg);
}

/* === Reveal (once) === */
.reveal {
  opacity: 0;
  transform: translateY(50px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal--visible {
  opacity: 1;
  transform: translateY(0);
}

.reveal--zoom {
  overflow: hidden;
}

.reveal--zoom img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.reveal--zoom:hover img {
  transform: scale(1.1);
}

.reveal-up {
  animation: rise-in var(--transition-reveal) both;
}

@keyframes drop-in {
  from { opacity: 0; transform: translateY(-50px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(100px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Category Galleries === */
.project-header {
  text-align: center;
  margin: 1rem 0 2rem;
}

.gallery-backdrop {
  transition: opacity var(--transition-normal);
}

.gallery-backdrop.suppressed {
  opacity: 0.2;
  pointer-events: none;
}

.gallery {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-height: 100vh;
  margin-bottom: 10rem;
}

.gallery__intro {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  margin: 2.5rem 0;
}

.gallery__intro p {
  width: 40%;
  min-width: 18rem;
  text-align: center;
}

.gallery__grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
  margin: 2.5rem 0;
}

.gallery__cell--wide {
  grid-column: 1 / -1;
}

@media (max-width: 768px) {
  .gallery__grid { grid-template-columns: 1fr; }
}

.project-card {
  display: flex;
  justify-content: center;
  padding: 0.5rem;
  cursor: pointer;
  border-radius: 0.5rem;
  transition: background var(--transition-fast);
}

.project-hoverable:hover,
.project-hoverable:focus-visible {
  background: rgba(255, 255, 255, 0.05);
  outline: none;
}

.project-card__body {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  align-items: center;
}

.project-card__cta {
  font-weight: 700;
  text-align: center;
}

.project-card__description {
  text-align: center;
}

.masonry {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  grid-auto-rows: 150px;
  gap: 2rem;
  width: 100%;
}

.masonry__tile { grid-column: span 2; }
.masonry__tile--rows-1 { grid-row: span 1; }
.masonry__tile--rows-2 { grid-row: span 2; }
.masonry__tile--rows-3 { grid-row: span 3; }
.masonry__tile--rows-4 { grid-row: span 4; }

.masonry__image {
  width: 100%;
  height: 100%;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: var(--canvas);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  outline: none;
  animation: fade-in 200ms ease-out both;
}

.modal-back {
  position: absolute;
  top: 1rem;
  left: 1rem;
  z-index: 51;
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 56rem;
  max-height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.modal-caption {
  text-align: center;
}

.modal-nav,
.subpage__nav {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.modal-nav__btn {
  font-size: 2rem;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
}

.modal-nav__btn:not(:disabled):hover {
  background: var(--surface);
}

.modal-nav__position {
  color: var(--text-tertiary);
  font-variant-numeric: tabular-nums;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Playback Surface === */
.playback--image,
.playback--video {
  width: 100%;
  max-height: 75vh;
  object-fit: contain;
}

.playback--iframe {
  position: relative;
  width: 100%;
  height: 0;
  padding-bottom: 56.25%;
}

.playback--iframe iframe {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border: 0;
}

.playback--none {
  padding: 4rem 2rem;
  color: var(--text-tertiary);
  text-align: center;
}

/* === Subpages === */
.subpage {
  display: flex;
  flex-direction: column;
  gap: 3rem;
  margin: 2.5rem 0;
}

.subpage__row {
  display: grid;
  grid-template-columns: repeat(12, minmax(0, 1fr));
  gap: 1rem;
}

.subpage__text { grid-column: span 4; }
.subpage__media { grid-column: span 8; }
.order-first { order: -1; }
.order-last { order: 99; }

@media (max-width: 768px) {
  .subpage__text, .subpage__media { grid-column: 1 / -1; }
}

.subpage__projects {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.project-link {
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.empty-state,
.not-found p {
  color: var(--text-tertiary);
  text-align: center;
  margin: 4rem 0;
}
"#;
