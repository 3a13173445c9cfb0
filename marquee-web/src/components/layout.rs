//! Page chrome: document shell, header, and the shared error banner.

/// Escapes text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps page content in the full HTML document shell.
///
/// The shell carries the escape-key listener: pressing Escape while
/// the detail modal is on the page submits the close form, making the
/// key equivalent to the close button.
pub fn page_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-900 text-gray-100 min-h-screen">
    <div class="max-w-6xl mx-auto px-4 py-8">
        <header class="text-center mb-8">
            <h1 class="text-4xl font-bold text-white">🎬 Marquee</h1>
            <p class="text-gray-400 mt-2">Search movies and TV series</p>
        </header>
        {content}
    </div>
    <form id="close-form" method="post" action="/close" class="hidden"></form>
    <script>
        document.addEventListener('keydown', (e) => {{
            if (e.key === 'Escape' && document.getElementById('detail-modal')) {{
                document.getElementById('close-form').submit();
            }}
        }});
    </script>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Renders the dismissible error banner shared by both channels.
///
/// Dismissing clears the message only; loaded results stay on screen.
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="bg-red-900/40 border border-red-700 rounded-lg p-4 mb-6 flex items-center justify-between">
            <p class="text-red-200 text-sm font-medium">{}</p>
            <form method="post" action="/dismiss">
                <button type="submit" class="text-red-400 hover:text-red-200 px-2" aria-label="Dismiss">✕</button>
            </form>
        </div>"#,
        escape(message)
    )
}
