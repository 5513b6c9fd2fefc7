use web_sys::{Document, Element, HtmlElement};

const PAGE_MARKUP: &str = r##"
<nav>
  <button id="menuToggle" aria-expanded="false">Menu</button>
  <ul id="navLinks" class="nav-links">
    <li><a href="#about">About</a></li>
    <li><a href="#projects">Projects</a></li>
    <li><a href="#contact">Contact</a></li>
  </ul>
</nav>
<section id="about" style="height: 600px">
  <button id="ctaButton">View my work</button>
  <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=" alt="">
  <div class="stat-card"><span class="counter" data-count="100">0</span></div>
  <div class="skill-category">
    <div class="skill-bar"><div class="skill-progress" data-progress="85"></div></div>
  </div>
</section>
<section id="projects" style="height: 600px">
  <article class="project-card">
    <button class="project-button" data-project="weather">Details</button>
  </article>
  <article class="project-card">
    <button class="project-button" data-project="ecommerce">Details</button>
  </article>
</section>
<section id="contact" style="height: 600px">
  <form id="contactForm">
    <div class="form-group">
      <input id="name" type="text">
      <span class="error-message"></span>
    </div>
    <div class="form-group">
      <input id="email" type="email">
      <span class="error-message"></span>
    </div>
    <div class="form-group">
      <textarea id="message"></textarea>
      <span class="error-message"></span>
    </div>
    <button type="submit">Send</button>
  </form>
  <p id="formStatus" class="form-status"></p>
</section>
<button id="scrollToTop" hidden>Top</button>
<div id="projectModal" class="modal" hidden>
  <div class="modal-content">
    <button class="modal-close">Close</button>
    <h2 id="modalTitle"></h2>
    <div id="modalBody"></div>
  </div>
</div>
"##;

/// Page markup mounted under `<body>` for one test, removed on drop.
pub(crate) struct Fixture {
    root: Element,
}

impl Fixture {
    pub(crate) fn page() -> Self {
        Self::mount(PAGE_MARKUP)
    }

    pub(crate) fn empty() -> Self {
        Self::mount("")
    }

    fn mount(markup: &str) -> Self {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let body: HtmlElement = document.body().expect("body");
        let root = document.create_element("div").expect("fixture root");
        root.set_inner_html(markup);
        body.append_child(&root).expect("mount fixture");
        Self { root }
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn document(&self) -> Document {
        self.root.owner_document().expect("owner document")
    }

    pub(crate) fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("fixture has no {selector}"))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}
