//! Built-in page templates
//!
//! Pages are assembled from the components in [`crate::components`]; each
//! page is wrapped in the shared layout.

mod redirect;

use anyhow::Result;

use crate::components::{
    class, container, element, heading, html_escape, link, new_attrs, tags, time, void_element,
    with_attrs, AttrOption, Attributes, Options,
};
use crate::config::{ModuleConfig, SiteConfig};
use crate::content::{MarkdownRenderer, Post};

pub use redirect::redirect_page;

/// Navigation entries shown on every page
const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/blog.html", "Blog"),
    ("/packages.html", "Packages"),
];

/// Template renderer for the site's pages
pub struct TemplateRenderer {
    config: SiteConfig,
    markdown: MarkdownRenderer,
}

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Home page
    pub fn index(&self) -> String {
        let intro = format!(
            "<p>Hi, I'm {}. I write software, mostly Go and Rust, and occasionally write about it.</p>\
             <p>Read the {}, browse my {}, or find me on {}.</p>",
            html_escape(&self.config.author),
            link("/blog.html", "blog", &[]),
            link("/packages.html", "Go packages", &[]),
            link(&self.config.repo_base, "GitHub", &[&with_attrs(&["rel", "me"])]),
        );
        let section = container("section", &intro, &[&class(&["intro"])]);
        let body = format!("{}{}", heading(1, &self.config.title, &[]), section);
        self.layout(&self.config.title, "/", &body)
    }

    /// Blog page listing every post in the given order
    pub fn blog(&self, posts: &[Post]) -> Result<String> {
        let mut articles = String::new();
        for post in posts {
            articles.push_str(&self.article(post)?);
        }
        if posts.is_empty() {
            articles.push_str(&container("p", "Nothing here yet.", &[&class(&["empty"])]));
        }

        let body = format!("{}{}", heading(1, "Blog", &[]), articles);
        Ok(self.layout(&format!("Blog - {}", self.config.title), "/blog.html", &body))
    }

    /// Packages page listing the vanity Go modules
    pub fn packages(&self) -> String {
        let item_attrs = new_attrs(&[], &[&class(&["package"])]);
        let items: String = self
            .config
            .modules
            .iter()
            .map(|m| {
                let import_path = self.config.import_path(m);
                let source = link(&self.config.repo_url(m), "source", &[&class(&["source"])]);
                let docs = link(
                    &format!("https://pkg.go.dev/{}", import_path),
                    &import_path,
                    &[&class(&["import-path"])],
                );
                element("li", &item_attrs, &format!("{} ({})", docs, source))
            })
            .collect();

        let list = container("ul", &items, &[&class(&["packages"])]);
        let body = format!("{}{}", heading(1, "Packages", &[]), list);
        self.layout(
            &format!("Packages - {}", self.config.title),
            "/packages.html",
            &body,
        )
    }

    /// go-import redirect page for a module
    pub fn redirect(&self, module: &ModuleConfig) -> String {
        redirect_page(&self.config.import_path(module), &self.config.repo_url(module))
    }

    fn article(&self, post: &Post) -> Result<String> {
        let id = Options::with_id(post.slug());
        let mut inner = heading(2, &post.title, &[&class(&["post-title"])]);
        inner.push_str(&time(&post.published, &[&class(&["post-date"])]));
        if let Some(description) = &post.description {
            inner.push_str(&container(
                "p",
                &html_escape(description),
                &[&class(&["post-description"])],
            ));
        }
        inner.push_str(&tags(&post.tags, &[]));
        let content = self.markdown.render(&post.content)?;
        inner.push_str(&container("div", &content, &[&class(&["post-content"])]));

        Ok(container("article", &inner, &[&class(&["post"]), &id]))
    }

    /// Shared page layout; `current` marks the active navigation entry
    fn layout(&self, title: &str, current: &str, body: &str) -> String {
        let nav_items: String = NAV
            .iter()
            .map(|(href, text)| {
                let active = |attrs: &mut Attributes| {
                    if *href == current {
                        class(&["active"]).apply(attrs);
                        with_attrs(&["aria-current", "page"]).apply(attrs);
                    }
                };
                link(href, text, &[&class(&["nav-link"]), &active])
            })
            .collect();

        let charset = void_element("meta", &new_attrs(&[], &[&with_attrs(&["charset", "utf-8"])]));
        let viewport = void_element(
            "meta",
            &new_attrs(
                &[],
                &[&with_attrs(&[
                    "name",
                    "viewport",
                    "content",
                    "width=device-width, initial-scale=1",
                ])],
            ),
        );
        let stylesheet = void_element(
            "link",
            &new_attrs(
                &[],
                &[&with_attrs(&["rel", "stylesheet", "href", "/assets/style.css"])],
            ),
        );

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{}\n{}\n<title>{}</title>\n{}\n</head>\n<body>\n{}\n<main>\n{}\n</main>\n{}\n</body>\n</html>\n",
            charset,
            viewport,
            html_escape(title),
            stylesheet,
            container("nav", &nav_items, &[&class(&["site-nav"])]),
            body,
            container(
                "footer",
                &format!("&copy; {}", html_escape(&self.config.author)),
                &[&class(&["site-footer"])],
            ),
        )
    }
}
