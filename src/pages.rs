//! Server-side HTML for every page of the site
//!
//! Each page builds its body and hands it to [`shell`], which adds the head,
//! the navigation bar and the footer. All catalog text goes through the
//! highlighter's escaping helpers before it reaches the markup.

use std::fmt::Write;

use crate::code_block::CodeBlock;
use crate::content::{Catalog, Example, Link};
use crate::highlighter::{escape_attr, escape_html, highlight_line};
use crate::playground;

pub const SITE_NAME: &str = "RIFT";
pub const DEFAULT_SAMPLE: &str = "hello";
pub const DEFAULT_PEER: &str = "python";

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: #1a1b26;
            color: #c0caf5;
            line-height: 1.6;
        }

        a {
            color: #7aa2f7;
            text-decoration: none;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 20px;
        }

        header.site {
            border-bottom: 1px solid #292e42;
            background: #16161e;
        }

        header.site nav {
            display: flex;
            align-items: center;
            gap: 20px;
            height: 60px;
        }

        header.site .brand {
            font-weight: bold;
            font-size: 1.3rem;
            color: #c0caf5;
            margin-right: auto;
        }

        header.site nav a.active {
            color: #bb9af7;
            border-bottom: 2px solid #bb9af7;
        }

        main {
            padding: 40px 0;
        }

        h1, h2, h3 {
            color: #c0caf5;
            margin-bottom: 15px;
        }

        section {
            margin-bottom: 40px;
        }

        .muted {
            color: #565f89;
        }

        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
            gap: 20px;
        }

        .card {
            background: #24283b;
            border: 1px solid #292e42;
            border-radius: 10px;
            padding: 20px;
        }

        .badge {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 10px;
            font-size: 0.8rem;
            background: #292e42;
        }

        .badge.green { color: #9ece6a; }
        .badge.orange { color: #ff9e64; }
        .badge.red { color: #f7768e; }

        .tabs {
            display: flex;
            flex-wrap: wrap;
            gap: 10px;
            margin-bottom: 20px;
        }

        .tabs a {
            padding: 6px 14px;
            border-radius: 20px;
            background: #24283b;
        }

        .tabs a.active {
            background: #7aa2f7;
            color: #1a1b26;
        }

        table {
            width: 100%;
            border-collapse: collapse;
        }

        th, td {
            text-align: left;
            padding: 8px 12px;
            border-bottom: 1px solid #292e42;
        }

        code, pre, textarea, .mono {
            font-family: 'JetBrains Mono', 'Courier New', monospace;
        }

        .code-block {
            background: #16161e;
            border: 1px solid #292e42;
            border-radius: 10px;
            overflow: hidden;
            position: relative;
            margin: 10px 0;
        }

        .code-header {
            display: flex;
            align-items: center;
            gap: 10px;
            padding: 8px 14px;
            background: #1f2335;
            border-bottom: 1px solid #292e42;
        }

        .dots {
            display: flex;
            gap: 6px;
        }

        .dot {
            width: 12px;
            height: 12px;
            border-radius: 50%;
        }

        .dot.red { background: #f7768e; }
        .dot.orange { background: #ff9e64; }
        .dot.green { background: #9ece6a; }

        .code-header .language {
            margin-left: auto;
            text-transform: uppercase;
            font-size: 0.75rem;
            color: #565f89;
        }

        .code-body pre {
            padding: 14px 0;
            overflow-x: auto;
            font-size: 14px;
        }

        .line {
            display: flex;
            padding: 0 14px;
            white-space: pre;
        }

        .line.hl {
            background: rgba(122, 162, 247, 0.12);
        }

        .ln {
            width: 3em;
            flex-shrink: 0;
            color: #3b4261;
            user-select: none;
        }

        .copy {
            position: absolute;
            top: 6px;
            right: 10px;
            background: #292e42;
            color: #c0caf5;
            border: none;
            border-radius: 6px;
            padding: 4px 10px;
            cursor: pointer;
        }

        .code-header + .code-body .copy {
            top: 46px;
        }

        .terminal p {
            opacity: 0;
            animation: reveal 0.3s forwards;
        }

        .terminal p.success { color: #9ece6a; }
        .terminal p.highlight { color: #bb9af7; font-weight: bold; }

        @keyframes reveal {
            to { opacity: 1; }
        }

        .playground {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
        }

        @media (max-width: 768px) {
            .playground {
                grid-template-columns: 1fr;
            }
        }

        .panel-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 10px;
            margin-bottom: 10px;
        }

        #editor {
            width: 100%;
            height: 420px;
            background: #16161e;
            color: #c0caf5;
            border: 1px solid #292e42;
            border-radius: 10px;
            padding: 14px;
            font-size: 14px;
            resize: vertical;
        }

        #output {
            min-height: 420px;
            background: #16161e;
            border: 1px solid #292e42;
            border-radius: 10px;
            padding: 14px;
            white-space: pre-wrap;
        }

        button.action {
            background: #7aa2f7;
            color: #1a1b26;
            border: none;
            padding: 8px 16px;
            border-radius: 20px;
            cursor: pointer;
            font-weight: bold;
        }

        button.action:disabled {
            opacity: 0.6;
            cursor: not-allowed;
        }

        button.secondary {
            background: #292e42;
            color: #c0caf5;
        }

        footer.site {
            border-top: 1px solid #292e42;
            padding: 40px 0;
            background: #16161e;
        }

        footer.site .columns {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 20px;
        }

        footer.site ul {
            list-style: none;
        }
"#;

const CLIPBOARD_SCRIPT: &str = r#"
        document.addEventListener('click', function(event) {
            const button = event.target.closest('button.copy');
            if (!button) {
                return;
            }
            navigator.clipboard.writeText(button.dataset.copy).then(function() {
                button.textContent = 'Copied!';
                setTimeout(function() { button.textContent = 'Copy'; }, 2000);
            });
        });
"#;

const PLAYGROUND_SCRIPT: &str = r#"
        const editor = document.getElementById('editor');
        const output = document.getElementById('output');
        const runBtn = document.getElementById('runBtn');

        function loadSample(key) {
            const sample = samples.find(function(s) { return s.key === key; });
            if (sample) {
                editor.value = sample.code;
            }
        }

        async function runCode() {
            runBtn.disabled = true;
            runBtn.textContent = 'Running...';
            output.textContent = 'Running...';

            try {
                const response = await fetch('/api/run', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ code: editor.value })
                });
                const result = await response.json();
                output.textContent = result.output;
            } catch (error) {
                output.textContent = 'Network Error: ' + error.message;
            }

            runBtn.disabled = false;
            runBtn.textContent = 'Run';
        }

        function clearOutput() {
            output.textContent = '';
        }

        async function downloadCode() {
            const response = await fetch('/api/download', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ code: editor.value, filename: 'script.rift' })
            });
            const blob = await response.blob();
            const url = URL.createObjectURL(blob);
            const a = document.createElement('a');
            a.href = url;
            a.download = 'script.rift';
            a.click();
            URL.revokeObjectURL(url);
        }

        function setFontSize(size) {
            editor.style.fontSize = size + 'px';
        }
"#;

/// Metadata for the shared page shell.
struct Page<'a> {
    title: &'a str,
    description: &'a str,
    active: &'a str,
}

fn shell(catalog: &Catalog, page: &Page<'_>, body: &str) -> String {
    let title = if page.title == SITE_NAME {
        format!("{} - The Backend Language That Just Works", SITE_NAME)
    } else {
        format!("{} | {}", page.title, SITE_NAME)
    };

    let mut nav = String::new();
    for link in &catalog.nav {
        if link.href == page.active {
            let _ = write!(
                nav,
                "<a class=\"active\" aria-current=\"page\" href=\"{}\">{}</a>",
                escape_attr(link.href),
                escape_html(link.label)
            );
        } else {
            let _ = write!(nav, "{}", anchor(link));
        }
    }

    let mut footer = String::new();
    for group in &catalog.footer {
        let _ = write!(footer, "<div><h3>{}</h3><ul>", escape_html(group.title));
        for link in &group.links {
            let _ = write!(footer, "<li>{}</li>", anchor(link));
        }
        footer.push_str("</ul></div>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <style>{style}</style>
</head>
<body>
    <header class="site"><div class="container"><nav><a class="brand" href="/">{site}</a>{nav}</nav></div></header>
    <main><div class="container">{body}</div></main>
    <footer class="site"><div class="container"><div class="columns">{footer}</div><p class="muted">&copy; {site} Programming Language. MIT License.</p></div></footer>
    <script>{clipboard}</script>
</body>
</html>"#,
        title = escape_html(&title),
        description = escape_attr(page.description),
        style = STYLE,
        site = SITE_NAME,
        nav = nav,
        body = body,
        footer = footer,
        clipboard = CLIPBOARD_SCRIPT,
    )
}

fn anchor(link: &Link) -> String {
    if link.external {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_attr(link.href),
            escape_html(link.label)
        )
    } else {
        format!("<a href=\"{}\">{}</a>", escape_attr(link.href), escape_html(link.label))
    }
}

pub fn home(catalog: &Catalog) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        "<section class=\"hero\"><h1>The backend language that just works</h1>\
         <p class=\"muted\">HTTP, databases, crypto and JSON built in. One command to install, zero packages to manage.</p>\
         {}\
         <p><a href=\"/installation\">Get Started</a> &middot; <a href=\"/playground\">Try the Playground</a></p></section>",
        CodeBlock::new(crate::content::INSTALL_COMMAND)
            .language("bash")
            .line_numbers(false)
            .render()
    );

    body.push_str("<section><h2>Install in seconds</h2><div class=\"card terminal mono\">");
    for line in &catalog.transcript {
        let class = if line.highlight {
            " class=\"highlight\""
        } else if line.success {
            " class=\"success\""
        } else {
            ""
        };
        let text = if line.text.is_empty() {
            "&nbsp;".to_string()
        } else {
            escape_html(line.text)
        };
        let _ = write!(
            body,
            "<p{} style=\"animation-delay:{}ms\">{}</p>",
            class, line.delay_ms, text
        );
    }
    body.push_str("</div></section>");

    body.push_str("<section><h2>Batteries included</h2><div class=\"grid\">");
    for feature in &catalog.features {
        let _ = write!(
            body,
            "<div class=\"card\"><h3>{}</h3><p>{}</p><code>{}</code></div>",
            escape_html(feature.title),
            escape_html(feature.description),
            highlight_line(feature.example)
        );
    }
    body.push_str("</div></section>");

    if let Some(server) = catalog.sample("server") {
        let serve_lines = server
            .code
            .lines()
            .enumerate()
            .filter(|(_, line)| line.contains(playground::SERVE_CALL))
            .map(|(index, _)| index + 1);
        let _ = write!(
            body,
            "<section><h2>A web server in a few lines</h2>{}<p><a href=\"/playground?example=server\">Open in Playground</a></p></section>",
            CodeBlock::new(server.code)
                .filename("server.rift")
                .highlight_lines(serve_lines)
                .render()
        );
    }

    shell(
        catalog,
        &Page {
            title: SITE_NAME,
            description: "RIFT is a backend programming language with HTTP, database, crypto and JSON modules built in.",
            active: "/",
        },
        &body,
    )
}

pub fn installation(catalog: &Catalog) -> String {
    let mut body = String::from("<h1>Installation</h1>");

    let _ = write!(
        body,
        "<section><h2>Quick install</h2><p>Run one of these commands in your terminal:</p>{}{}</section>",
        CodeBlock::new(crate::content::INSTALL_COMMAND)
            .language("bash")
            .filename("curl")
            .line_numbers(false)
            .render(),
        CodeBlock::new(crate::content::WGET_COMMAND)
            .language("bash")
            .filename("wget")
            .line_numbers(false)
            .render()
    );

    body.push_str(
        "<section><h2>Requirements</h2><ul>\
         <li>Python 3.8 or later</li>\
         <li>Linux, macOS or WSL</li>\
         <li>curl or wget</li></ul></section>",
    );

    let _ = write!(
        body,
        "<section><h2>Your first program</h2>{}<p class=\"mono\">$ rift hello.rift</p></section>",
        CodeBlock::new(catalog.hello_world).filename("hello.rift").render()
    );

    let _ = write!(
        body,
        "<section><h2>Your first web server</h2>{}<p class=\"mono\">$ riftserver server.rift</p></section>",
        CodeBlock::new(catalog.web_server).filename("server.rift").render()
    );

    body.push_str("<section><h2>CLI commands</h2><table><tr><th>Command</th><th>Description</th></tr>");
    for cmd in &catalog.cli_commands {
        let _ = write!(
            body,
            "<tr><td class=\"mono\">{}</td><td>{}</td></tr>",
            escape_html(cmd.command),
            escape_html(cmd.description)
        );
    }
    body.push_str("</table></section>");

    let _ = write!(
        body,
        "<section><h2>Uninstall</h2>{}</section>",
        CodeBlock::new(crate::content::UNINSTALL_COMMAND)
            .language("bash")
            .line_numbers(false)
            .render()
    );

    body.push_str("<section><h2>Troubleshooting</h2>");
    for faq in &catalog.faq {
        let _ = write!(
            body,
            "<details class=\"card\"><summary>{}</summary><p>{}</p></details>",
            escape_html(faq.question),
            escape_html(faq.answer)
        );
    }
    body.push_str("</section>");

    shell(
        catalog,
        &Page {
            title: "Installation",
            description: "Install RIFT with a single command.",
            active: "/installation",
        },
        &body,
    )
}

pub fn docs(catalog: &Catalog) -> String {
    let mut body = String::from("<h1>Documentation</h1><div class=\"grid\">");

    for section in &catalog.doc_sections {
        let _ = write!(body, "<div class=\"card\"><h3>{}</h3><ul>", escape_html(section.title));
        for item in &section.items {
            let _ = write!(body, "<li>{}</li>", anchor(item));
        }
        body.push_str("</ul></div>");
    }
    body.push_str("</div>");

    let _ = write!(
        body,
        "<section><h2>Language overview</h2>{}</section>",
        CodeBlock::new(catalog.overview).filename("overview.rift").render()
    );

    body.push_str("<section><h2>Quick reference</h2><div class=\"grid\">");
    for (title, entries) in [("Keywords", &catalog.keyword_ref), ("Special syntax", &catalog.syntax_ref)] {
        let _ = write!(body, "<div class=\"card\"><h3>{}</h3><table>", title);
        for entry in entries {
            let _ = write!(
                body,
                "<tr><td><code>{}</code></td><td>{}</td></tr>",
                highlight_line(entry.term),
                escape_html(entry.description)
            );
        }
        body.push_str("</table></div>");
    }
    body.push_str("</div></section>");

    shell(
        catalog,
        &Page {
            title: "Documentation",
            description: "Learn the RIFT language: syntax, control flow, classes and the standard library.",
            active: "/docs",
        },
        &body,
    )
}

/// Playground preloaded with a sample or example; unknown keys load the hello sample.
pub fn playground(catalog: &Catalog, key: Option<&str>) -> String {
    let (selected, code) = match key.and_then(|k| catalog.playground_source(k).map(|code| (k, code))) {
        Some(found) => found,
        None => (
            DEFAULT_SAMPLE,
            catalog.sample(DEFAULT_SAMPLE).map(|s| s.code).unwrap_or_default(),
        ),
    };

    let samples = serde_json::to_string(&catalog.samples)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");

    let mut options = String::new();
    for sample in &catalog.samples {
        let selected_attr = if sample.key == selected { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            escape_attr(sample.key),
            selected_attr,
            escape_html(sample.name)
        );
    }

    let mut sizes = String::new();
    for size in [12, 14, 16, 18] {
        let selected_attr = if size == 14 { " selected" } else { "" };
        let _ = write!(sizes, "<option value=\"{0}\"{1}>{0}px</option>", size, selected_attr);
    }

    let body = format!(
        r#"<h1>Playground</h1>
<p class="muted">Write RIFT in the browser. Output is a <strong>simulated preview</strong>: only <code>print(...)</code> calls are echoed, nothing is executed.</p>
<div class="playground">
    <div>
        <div class="panel-header">
            <select id="sample" aria-label="Example" onchange="loadSample(this.value)">{options}</select>
            <select id="fontSize" aria-label="Font size" onchange="setFontSize(this.value)">{sizes}</select>
            <button class="action secondary" type="button" onclick="downloadCode()">Download</button>
            <button class="action" id="runBtn" type="button" onclick="runCode()">Run</button>
        </div>
        <textarea id="editor" spellcheck="false">{code}</textarea>
    </div>
    <div>
        <div class="panel-header">
            <h3>Output <span class="badge orange">Simulated preview</span></h3>
            <button class="action secondary" type="button" onclick="clearOutput()">Clear</button>
        </div>
        <pre id="output">{initial}</pre>
    </div>
</div>
<script>const samples = {samples};{script}</script>"#,
        options = options,
        sizes = sizes,
        code = escape_html(code),
        initial = escape_html("Click \"Run\" to see the simulated output."),
        samples = samples,
        script = PLAYGROUND_SCRIPT,
    );

    shell(
        catalog,
        &Page {
            title: "Playground",
            description: "Try RIFT in your browser with a simulated output preview.",
            active: "/playground",
        },
        &body,
    )
}

/// Example gallery; an unknown or missing category shows every example.
pub fn examples(catalog: &Catalog, category: Option<&str>) -> String {
    let category = category.and_then(|id| catalog.category(id));

    let mut body = String::from(
        "<h1>Examples</h1><p class=\"muted\">Real-world RIFT programs you can copy or open in the playground.</p><div class=\"tabs\">",
    );
    let all_class = if category.is_none() { " class=\"active\"" } else { "" };
    let _ = write!(body, "<a{} href=\"/examples\">All</a>", all_class);
    for cat in &catalog.categories {
        let class = if category.is_some_and(|c| c.id == cat.id) { " class=\"active\"" } else { "" };
        let _ = write!(
            body,
            "<a{} href=\"/examples?category={}\">{}</a>",
            class,
            escape_attr(cat.id),
            escape_html(cat.name)
        );
    }
    body.push_str("</div>");

    let shown: Vec<&Example> = match category {
        Some(cat) => catalog.examples_in(cat.id).collect(),
        None => catalog.examples.iter().collect(),
    };
    for example in shown {
        body.push_str(&example_card(example));
    }

    shell(
        catalog,
        &Page {
            title: "Examples",
            description: "RIFT examples: REST APIs, authentication, file uploads, real-time chat and more.",
            active: "/examples",
        },
        &body,
    )
}

fn example_card(example: &Example) -> String {
    let mut tags = String::new();
    for tag in example.tags {
        let _ = write!(tags, "<span class=\"badge\">#{}</span> ", escape_html(tag));
    }
    let filename = format!("{}.rift", example.id);

    format!(
        "<section class=\"card\" id=\"{id}\"><h2>{title}</h2><p>{description}</p>\
         <p><span class=\"badge {class}\">{difficulty}</span> <span class=\"muted\">{time}</span> {tags}</p>\
         {code}<p><a href=\"/playground?example={id}\">Open in Playground</a></p></section>",
        id = escape_attr(example.id),
        title = escape_html(example.title),
        description = escape_html(example.description),
        class = example.difficulty.css_class(),
        difficulty = example.difficulty.label(),
        time = escape_html(example.time),
        tags = tags,
        code = CodeBlock::new(example.code).filename(&filename).render(),
    )
}

/// Side-by-side comparison against one peer language, Python by default.
/// A known `topic` narrows the snippets to that topic; otherwise all are shown.
pub fn comparison(catalog: &Catalog, lang: Option<&str>, topic: Option<&str>) -> String {
    let peer = lang
        .and_then(|id| catalog.peer_languages().find(|l| l.id == id))
        .or_else(|| catalog.language(DEFAULT_PEER));
    let peer_id = peer.map(|l| l.id).unwrap_or(DEFAULT_PEER);
    let peer_name = peer.map(|l| l.name).unwrap_or("Python");

    let mut body = format!("<h1>RIFT vs {}</h1><div class=\"tabs\">", escape_html(peer_name));
    for language in catalog.peer_languages() {
        let class = if language.id == peer_id { " class=\"active\"" } else { "" };
        let _ = write!(
            body,
            "<a{} href=\"/comparison?lang={}\" style=\"border-left:3px solid {}\">{}</a>",
            class,
            escape_attr(language.id),
            escape_attr(language.color),
            escape_html(language.name)
        );
    }
    body.push_str("</div><div class=\"tabs\">");

    let topic = topic.and_then(|id| catalog.comparison(id));
    let all_class = if topic.is_none() { " class=\"active\"" } else { "" };
    let _ = write!(
        body,
        "<a{} href=\"/comparison?lang={}\">All topics</a>",
        all_class,
        escape_attr(peer_id)
    );
    for entry in &catalog.comparisons {
        let class = if topic.is_some_and(|t| t.id == entry.id) { " class=\"active\"" } else { "" };
        let _ = write!(
            body,
            "<a{} href=\"/comparison?lang={}&amp;topic={}\">{}</a>",
            class,
            escape_attr(peer_id),
            escape_attr(entry.id),
            escape_html(entry.title)
        );
    }
    body.push_str("</div>");

    let topics = match topic {
        Some(one) => std::slice::from_ref(one),
        None => catalog.comparisons.as_slice(),
    };
    for topic in topics {
        let _ = write!(
            body,
            "<section><h2>{}</h2><div class=\"grid\"><div>{}</div>",
            escape_html(topic.title),
            CodeBlock::new(topic.rift).render()
        );
        if let Some(snippet) = topic.snippet(peer_id) {
            let _ = write!(body, "<div>{}</div>", CodeBlock::new(snippet).language(peer_id).render());
        }
        body.push_str("</div></section>");
    }

    body.push_str("<section><h2>Feature matrix</h2><table><tr><th>Feature</th>");
    for language in &catalog.languages {
        let _ = write!(body, "<th>{}</th>", escape_html(language.name));
    }
    body.push_str("</tr>");
    for row in &catalog.feature_matrix {
        let _ = write!(body, "<tr><td>{}</td>", escape_html(row.feature));
        for supported in row.support {
            body.push_str(if supported {
                "<td class=\"badge green\">&#10003;</td>"
            } else {
                "<td class=\"badge red\">&#10007;</td>"
            });
        }
        body.push_str("</tr>");
    }
    body.push_str("</table></section>");

    body.push_str("<section><h2>Getting started</h2><div class=\"grid\">");
    for setup in catalog.setup.iter().filter(|s| s.language == "rift" || s.language == peer_id) {
        let name = catalog.language(setup.language).map(|l| l.name).unwrap_or(setup.language);
        let _ = write!(
            body,
            "<div class=\"card\"><h3>{} <span class=\"muted\">({} steps)</span></h3><ol>",
            escape_html(name),
            setup.steps.len()
        );
        for step in setup.steps {
            let _ = write!(body, "<li class=\"mono\">{}</li>", escape_html(step));
        }
        body.push_str("</ol></div>");
    }
    body.push_str("</div></section>");

    shell(
        catalog,
        &Page {
            title: "Compare",
            description: "How RIFT compares to Python, JavaScript, PHP, Go, Rust and Ruby.",
            active: "/comparison",
        },
        &body,
    )
}

pub fn community(catalog: &Catalog) -> String {
    let mut body = String::from("<h1>Community</h1><section><div class=\"grid\">");

    for channel in &catalog.channels {
        let _ = write!(
            body,
            "<div class=\"card\"><h3>{}</h3><p>{}</p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></div>",
            escape_html(channel.name),
            escape_html(channel.description),
            escape_attr(channel.url),
            escape_html(channel.cta)
        );
    }
    body.push_str("</div></section>");

    body.push_str("<section id=\"contributing\"><h2>Ways to contribute</h2><div class=\"grid\">");
    for way in &catalog.contributions {
        let _ = write!(
            body,
            "<a class=\"card\" href=\"{}\"><h3>{}</h3><p>{}</p></a>",
            escape_attr(way.link),
            escape_html(way.title),
            escape_html(way.description)
        );
    }
    body.push_str("</div></section>");

    body.push_str("<section><h2>Resources</h2><ul>");
    for link in &catalog.resources {
        let _ = write!(body, "<li>{}</li>", anchor(link));
    }
    body.push_str("</ul></section>");

    shell(
        catalog,
        &Page {
            title: "Community",
            description: "Join the RIFT community on GitHub, Discord and Twitter.",
            active: "/community",
        },
        &body,
    )
}

/// Standard library reference; a known `module` id shows only that module.
pub fn api_reference(catalog: &Catalog, module: Option<&str>) -> String {
    let selected = module.and_then(|id| catalog.module(id));

    let mut body = String::from("<h1>API Reference</h1><div class=\"tabs\">");
    let all_class = if selected.is_none() { " class=\"active\"" } else { "" };
    let _ = write!(body, "<a{} href=\"/api-reference\">All</a>", all_class);
    for module in &catalog.modules {
        let class = if selected.is_some_and(|m| m.id == module.id) { " class=\"active\"" } else { "" };
        let _ = write!(
            body,
            "<a{} href=\"/api-reference?module={}\">{}</a>",
            class,
            escape_attr(module.id),
            escape_html(module.name)
        );
    }
    body.push_str("</div>");

    let modules = match selected {
        Some(one) => std::slice::from_ref(one),
        None => catalog.modules.as_slice(),
    };
    for module in modules {
        let _ = write!(
            body,
            "<section id=\"{}\"><h2>{}</h2><p class=\"muted\">{}</p><code>{}</code>",
            escape_attr(module.id),
            escape_html(module.name),
            escape_html(module.description),
            highlight_line(&module.import_line())
        );

        if module.methods.is_empty() {
            body.push_str("<p class=\"muted\">Detailed reference coming soon.</p>");
        }

        for method in &module.methods {
            let _ = write!(
                body,
                "<div class=\"card\"><h3 class=\"mono\">{}</h3><p>{}</p>",
                escape_html(method.signature),
                escape_html(method.description)
            );
            if !method.params.is_empty() {
                body.push_str("<table><tr><th>Parameter</th><th>Type</th><th>Description</th></tr>");
                for param in &method.params {
                    let _ = write!(
                        body,
                        "<tr><td class=\"mono\">{}</td><td class=\"mono\">{}</td><td>{}</td></tr>",
                        escape_html(param.name),
                        escape_html(param.ty),
                        escape_html(param.description)
                    );
                }
                body.push_str("</table>");
            }
            let _ = write!(body, "{}</div>", CodeBlock::new(method.example).language("").render());
        }
        body.push_str("</section>");
    }

    shell(
        catalog,
        &Page {
            title: "API Reference",
            description: "Reference for the RIFT standard library modules.",
            active: "/api-reference",
        },
        &body,
    )
}

pub fn not_found(catalog: &Catalog, path: &str) -> String {
    let body = format!(
        "<section class=\"hero\"><h1>404</h1><p>Nothing lives at <code>{}</code>.</p><p><a href=\"/\">Back home</a></p></section>",
        escape_html(path)
    );

    shell(
        catalog,
        &Page {
            title: "Page Not Found",
            description: "This page does not exist.",
            active: "",
        },
        &body,
    )
}

/// Plain-text preview shown by the CLI `run` command.
pub fn run_banner(source: &str) -> String {
    format!(
        "-- simulated preview, nothing was executed --\n{}",
        playground::simulate(source).render()
    )
}
