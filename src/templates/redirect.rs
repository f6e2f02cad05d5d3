//! Go vanity import redirect pages

use crate::components::html_escape;

/// Render the page answering `go get` for `import_path`.
///
/// Browsers are sent on to the module's documentation on pkg.go.dev.
pub fn redirect_page(import_path: &str, repo_url: &str) -> String {
    let name = html_escape(import_path);
    let repo = html_escape(repo_url);
    format!(
        r#"<html>
  <head>
    <meta name="go-import" content="{name} git {repo}">
    <meta name="go-source" content="{name} {repo} {repo}/tree/main{{/dir}} {repo}/tree/main{{/dir}}/{{file}}#L{{line}}">
    <meta name="robots" content="noindex">
    <meta http-equiv="refresh" content="0; url=https://pkg.go.dev/{name}">
  </head>
  <body>
    Redirecting to <a href="https://pkg.go.dev/{name}">pkg.go.dev/{name}</a>.
  </body>
</html>
"#
    )
}
