//! Static site content
//!
//! Everything the pages show is assembled once into a [`Catalog`] at startup
//! and shared read-only afterwards. Long code samples live under `content/`
//! and are embedded at build time.

use serde::Serialize;

pub const REPO_URL: &str = "https://github.com/FoundationINCCorporateTeam/RIFT";
pub const DISCORD_URL: &str = "https://discord.gg/rift";
pub const TWITTER_URL: &str = "https://twitter.com/riftlang";
pub const INSTALL_COMMAND: &str = "curl -sSL https://rift.astroyds.com/rift/install.sh | bash";
pub const WGET_COMMAND: &str = "wget -qO- https://rift.astroyds.com/rift/install.sh | bash";
pub const UNINSTALL_COMMAND: &str = "curl -sSL https://rift.astroyds.com/rift/uninstall.sh | bash";

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
    pub external: bool,
}

impl Link {
    const fn local(href: &'static str, label: &'static str) -> Self {
        Self { href, label, external: false }
    }

    const fn external(href: &'static str, label: &'static str) -> Self {
        Self { href, label, external: true }
    }
}

#[derive(Debug, Clone)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// One line of the install transcript on the home page.
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    pub text: &'static str,
    pub delay_ms: u32,
    pub success: bool,
    pub highlight: bool,
}

#[derive(Debug, Clone)]
pub struct CliCommand {
    pub command: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone)]
pub struct DocSection {
    pub title: &'static str,
    pub items: Vec<Link>,
}

/// A keyword or syntax form with its one-line meaning.
#[derive(Debug, Clone)]
pub struct RefEntry {
    pub term: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleCategory {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "green",
            Difficulty::Intermediate => "orange",
            Difficulty::Advanced => "red",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub time: &'static str,
    pub tags: &'static [&'static str],
    pub code: &'static str,
}

/// A playground preset.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub key: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone)]
pub struct ApiParam {
    pub name: &'static str,
    pub ty: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct ApiMethod {
    pub signature: &'static str,
    pub description: &'static str,
    pub params: Vec<ApiParam>,
    pub example: &'static str,
}

#[derive(Debug, Clone)]
pub struct ApiModule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub methods: Vec<ApiMethod>,
}

impl ApiModule {
    pub fn import_line(&self) -> String {
        format!("grab {}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct Language {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub id: &'static str,
    pub title: &'static str,
    pub rift: &'static str,
    peers: Vec<(&'static str, &'static str)>,
}

impl Comparison {
    pub fn snippet(&self, language: &str) -> Option<&'static str> {
        self.peers
            .iter()
            .find(|(id, _)| *id == language)
            .map(|(_, code)| *code)
    }
}

/// Feature support across RIFT and the peer languages, in `Catalog::languages` order
/// with RIFT first.
#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub feature: &'static str,
    pub support: [bool; 7],
}

#[derive(Debug, Clone)]
pub struct SetupSteps {
    pub language: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct Channel {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone)]
pub struct Contribution {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub nav: Vec<Link>,
    pub footer: Vec<LinkGroup>,
    pub features: Vec<Feature>,
    pub transcript: Vec<TranscriptLine>,
    pub cli_commands: Vec<CliCommand>,
    pub faq: Vec<Faq>,
    pub hello_world: &'static str,
    pub web_server: &'static str,
    pub doc_sections: Vec<DocSection>,
    pub overview: &'static str,
    pub keyword_ref: Vec<RefEntry>,
    pub syntax_ref: Vec<RefEntry>,
    pub categories: Vec<ExampleCategory>,
    pub examples: Vec<Example>,
    pub samples: Vec<Sample>,
    pub modules: Vec<ApiModule>,
    pub languages: Vec<Language>,
    pub comparisons: Vec<Comparison>,
    pub feature_matrix: Vec<FeatureRow>,
    pub setup: Vec<SetupSteps>,
    pub channels: Vec<Channel>,
    pub contributions: Vec<Contribution>,
    pub resources: Vec<Link>,
}

impl Catalog {
    pub fn load() -> Self {
        Self {
            nav: nav(),
            footer: footer(),
            features: features(),
            transcript: transcript(),
            cli_commands: cli_commands(),
            faq: faq(),
            hello_world: include_str!("../content/docs/hello.rift").trim_end(),
            web_server: include_str!("../content/docs/server.rift").trim_end(),
            doc_sections: doc_sections(),
            overview: include_str!("../content/docs/overview.rift").trim_end(),
            keyword_ref: keyword_ref(),
            syntax_ref: syntax_ref(),
            categories: categories(),
            examples: examples(),
            samples: samples(),
            modules: modules(),
            languages: languages(),
            comparisons: comparisons(),
            feature_matrix: feature_matrix(),
            setup: setup(),
            channels: channels(),
            contributions: contributions(),
            resources: resources(),
        }
    }

    pub fn example(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    pub fn examples_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Example> + 'a {
        self.examples.iter().filter(move |e| e.category == category)
    }

    pub fn category(&self, id: &str) -> Option<&ExampleCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn sample(&self, key: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.key == key)
    }

    pub fn comparison(&self, id: &str) -> Option<&Comparison> {
        self.comparisons.iter().find(|c| c.id == id)
    }

    pub fn module(&self, id: &str) -> Option<&ApiModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn language(&self, id: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// Languages other than RIFT.
    pub fn peer_languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter().filter(|l| l.id != "rift")
    }

    /// Source for the playground: a preset key or an example id.
    pub fn playground_source(&self, key: &str) -> Option<&'static str> {
        self.sample(key)
            .map(|s| s.code)
            .or_else(|| self.example(key).map(|e| e.code))
    }
}

fn nav() -> Vec<Link> {
    vec![
        Link::local("/", "Home"),
        Link::local("/installation", "Installation"),
        Link::local("/docs", "Docs"),
        Link::local("/playground", "Playground"),
        Link::local("/examples", "Examples"),
        Link::local("/comparison", "Compare"),
        Link::local("/community", "Community"),
    ]
}

fn footer() -> Vec<LinkGroup> {
    vec![
        LinkGroup {
            title: "Product",
            links: vec![
                Link::local("/installation", "Installation"),
                Link::local("/docs", "Documentation"),
                Link::local("/playground", "Playground"),
                Link::local("/examples", "Examples"),
                Link::local("/api-reference", "API Reference"),
            ],
        },
        LinkGroup {
            title: "Compare",
            links: vec![
                Link::local("/comparison", "Overview"),
                Link::local("/comparison?lang=python", "vs Python"),
                Link::local("/comparison?lang=javascript", "vs JavaScript"),
                Link::local("/comparison?lang=php", "vs PHP"),
                Link::local("/comparison?lang=go", "vs Go"),
            ],
        },
        LinkGroup {
            title: "Community",
            links: vec![
                Link::local("/community", "Overview"),
                Link::external(REPO_URL, "GitHub"),
                Link::external(DISCORD_URL, "Discord"),
                Link::local("/community#contributing", "Contributing"),
            ],
        },
    ]
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "HTTP Module",
            description: "Built-in web server with routing, middleware, and responses. No Express or Flask needed.",
            example: "http.get(\"/\", fn) → http.serve(8080)",
        },
        Feature {
            title: "Database Module",
            description: "SQL, PostgreSQL, MongoDB support out of the box with query builders.",
            example: "db.table(\"users\").where(\"age\", \">\", 18).get()",
        },
        Feature {
            title: "Crypto Module",
            description: "Hashing, encryption, JWT tokens, and password hashing included.",
            example: "crypto.hash(\"data\"), crypto.token(payload)",
        },
        Feature {
            title: "File System",
            description: "Complete file and directory operations without any imports.",
            example: "fs.read(\"file.txt\"), fs.write(\"out.txt\", data)",
        },
        Feature {
            title: "JSON Module",
            description: "Native JSON parsing and serialization. No external libraries.",
            example: "json.parse(str), json.stringify(obj)",
        },
        Feature {
            title: "Async/Await",
            description: "First-class async support with pipeline operators for elegant chaining.",
            example: "wait fetchData() ~! process ~! save",
        },
    ]
}

fn transcript() -> Vec<TranscriptLine> {
    let line = |text, delay_ms, success, highlight| TranscriptLine {
        text,
        delay_ms,
        success,
        highlight,
    };
    vec![
        line("$ curl -sSL https://rift.astroyds.com/rift/install.sh | bash", 0, false, false),
        line("✓ Python detected", 500, true, false),
        line("✓ Dependencies installed", 1000, true, false),
        line("✓ RIFT installed to ~/.rift", 1500, true, false),
        line("✓ Commands available: rift, riftserver", 2000, true, false),
        line("", 2500, false, false),
        line("Welcome to RIFT! Run \"rift --help\" to get started.", 2700, false, true),
    ]
}

fn cli_commands() -> Vec<CliCommand> {
    let cmd = |command, description| CliCommand { command, description };
    vec![
        cmd("rift --version", "Show RIFT version"),
        cmd("rift --help", "Show help message"),
        cmd("rift script.rift", "Run a RIFT script"),
        cmd("rift repl", "Start interactive REPL"),
        cmd("rift doctor", "Check installation health"),
        cmd("rift update", "Update to latest version"),
        cmd("rift uninstall", "Uninstall RIFT"),
        cmd("riftserver app.rift", "Start RIFT web server"),
    ]
}

fn faq() -> Vec<Faq> {
    vec![
        Faq {
            question: "Python not found",
            answer: "RIFT requires Python 3.8 or later. Install Python from python.org or use your package manager (apt, brew, etc.).",
        },
        Faq {
            question: "Permission denied",
            answer: "The installer installs to ~/.rift and ~/.local/bin. Make sure you have write permissions to these directories.",
        },
        Faq {
            question: "Command not found after install",
            answer: "Restart your terminal or run 'source ~/.bashrc' (or ~/.zshrc for zsh) to refresh your PATH.",
        },
        Faq {
            question: "Download failed",
            answer: "Check your internet connection. If you're behind a proxy, configure curl/wget accordingly.",
        },
    ]
}

fn doc_sections() -> Vec<DocSection> {
    let section = |title, items: &[(&'static str, &'static str)]| DocSection {
        title,
        items: items.iter().map(|&(label, href)| Link::local(href, label)).collect(),
    };
    vec![
        section(
            "Getting Started",
            &[
                ("Installation", "/installation"),
                ("Your First Program", "/docs/first-program"),
                ("REPL Usage", "/docs/repl"),
            ],
        ),
        section(
            "Language Basics",
            &[
                ("Variables & Constants", "/docs/variables"),
                ("Data Types", "/docs/types"),
                ("Operators", "/docs/operators"),
                ("Comments", "/docs/comments"),
            ],
        ),
        section(
            "Control Flow",
            &[
                ("If-Else Statements", "/docs/if-else"),
                ("Loops (while, repeat)", "/docs/loops"),
                ("Pattern Matching", "/docs/pattern-matching"),
            ],
        ),
        section(
            "Functions",
            &[
                ("Function Declaration", "/docs/functions"),
                ("Lambda Expressions", "/docs/lambdas"),
                ("Closures", "/docs/closures"),
            ],
        ),
        section(
            "Classes & Objects",
            &[
                ("Class Declaration", "/docs/classes"),
                ("Inheritance", "/docs/inheritance"),
                ("Static Members", "/docs/static"),
                ("Getters & Setters", "/docs/getters-setters"),
            ],
        ),
        section(
            "Standard Library",
            &[
                ("HTTP Module", "/api-reference#http"),
                ("Database Module", "/api-reference#db"),
                ("Crypto Module", "/api-reference#crypto"),
                ("File System Module", "/api-reference#fs"),
                ("JSON Module", "/api-reference#json"),
            ],
        ),
    ]
}

fn keyword_ref() -> Vec<RefEntry> {
    let entry = |term, description| RefEntry { term, description };
    vec![
        entry("let", "Declare immutable variable"),
        entry("mut", "Declare mutable variable"),
        entry("const", "Declare constant"),
        entry("conduit", "Declare function"),
        entry("make", "Declare class"),
        entry("build", "Constructor method"),
        entry("grab", "Import module"),
        entry("share", "Export item"),
        entry("if/else", "Conditional"),
        entry("while", "While loop"),
        entry("repeat", "For-each loop"),
        entry("check/when", "Pattern matching"),
        entry("give", "Return value"),
        entry("fail", "Throw error"),
        entry("async/wait", "Async operations"),
        entry("yes/no", "Boolean literals"),
        entry("none", "Null value"),
    ]
}

fn syntax_ref() -> Vec<RefEntry> {
    let entry = |term, description| RefEntry { term, description };
    vec![
        entry("@ #", "Block delimiters (replaces { })"),
        entry("~ !", "Array delimiters (replaces [ ])"),
        entry("=!", "Lambda arrow"),
        entry("-!", "Pipeline operator"),
        entry("~!", "Async pipeline"),
        entry("?.", "Safe navigation"),
        entry("?~", "Safe indexing"),
        entry("??", "Null coalescing"),
        entry("::", "Static member access"),
        entry("..", "Range operator"),
        entry("...", "Spread operator"),
    ]
}

fn categories() -> Vec<ExampleCategory> {
    let category = |id, name| ExampleCategory { id, name };
    vec![
        category("web", "Web Development"),
        category("database", "Database"),
        category("auth", "Authentication"),
        category("realtime", "Real-time"),
        category("files", "File Handling"),
        category("async", "Async"),
    ]
}

fn examples() -> Vec<Example> {
    vec![
        Example {
            id: "rest-api",
            title: "REST API",
            description: "Build a complete REST API with CRUD operations",
            category: "web",
            difficulty: Difficulty::Beginner,
            time: "10 min",
            tags: &["http", "api", "crud"],
            code: include_str!("../content/examples/rest-api.rift").trim_end(),
        },
        Example {
            id: "jwt-auth",
            title: "JWT Authentication",
            description: "Implement JWT-based authentication with login and protected routes",
            category: "auth",
            difficulty: Difficulty::Intermediate,
            time: "20 min",
            tags: &["auth", "jwt", "security"],
            code: include_str!("../content/examples/jwt-auth.rift").trim_end(),
        },
        Example {
            id: "file-upload",
            title: "File Upload Handler",
            description: "Handle file uploads with validation and storage",
            category: "files",
            difficulty: Difficulty::Intermediate,
            time: "15 min",
            tags: &["files", "upload", "storage"],
            code: include_str!("../content/examples/file-upload.rift").trim_end(),
        },
        Example {
            id: "websocket-chat",
            title: "WebSocket Chat",
            description: "Real-time chat application using WebSockets",
            category: "realtime",
            difficulty: Difficulty::Advanced,
            time: "30 min",
            tags: &["websocket", "realtime", "chat"],
            code: include_str!("../content/examples/websocket-chat.rift").trim_end(),
        },
        Example {
            id: "async-processing",
            title: "Async Data Processing",
            description: "Process data asynchronously with error handling",
            category: "async",
            difficulty: Difficulty::Intermediate,
            time: "15 min",
            tags: &["async", "pipeline", "processing"],
            code: include_str!("../content/examples/async-processing.rift").trim_end(),
        },
        Example {
            id: "crud-database",
            title: "Database CRUD",
            description: "Complete CRUD operations with multiple database types",
            category: "database",
            difficulty: Difficulty::Beginner,
            time: "15 min",
            tags: &["database", "crud", "sql"],
            code: include_str!("../content/examples/crud-database.rift").trim_end(),
        },
    ]
}

fn samples() -> Vec<Sample> {
    vec![
        Sample {
            key: "hello",
            name: "Hello World",
            code: include_str!("../content/samples/hello.rift").trim_end(),
        },
        Sample {
            key: "server",
            name: "Web Server",
            code: include_str!("../content/samples/server.rift").trim_end(),
        },
        Sample {
            key: "database",
            name: "Database Query",
            code: include_str!("../content/samples/database.rift").trim_end(),
        },
        Sample {
            key: "classes",
            name: "Classes & Objects",
            code: include_str!("../content/samples/classes.rift").trim_end(),
        },
        Sample {
            key: "patterns",
            name: "Pattern Matching",
            code: include_str!("../content/samples/patterns.rift").trim_end(),
        },
        Sample {
            key: "async",
            name: "Async Operations",
            code: include_str!("../content/samples/async.rift").trim_end(),
        },
    ]
}

fn param(name: &'static str, ty: &'static str, description: &'static str) -> ApiParam {
    ApiParam { name, ty, description }
}

fn method(
    signature: &'static str,
    description: &'static str,
    params: Vec<ApiParam>,
    example: &'static str,
) -> ApiMethod {
    ApiMethod {
        signature,
        description,
        params,
        example,
    }
}

fn modules() -> Vec<ApiModule> {
    let module = |id, name, description, methods| ApiModule {
        id,
        name,
        description,
        methods,
    };
    vec![
        module("http", "HTTP", "HTTP server and client", http_api()),
        module("db", "Database", "SQL and NoSQL databases", db_api()),
        module("crypto", "Crypto", "Cryptography and hashing", crypto_api()),
        module("fs", "File System", "File operations", fs_api()),
        module("json", "JSON", "JSON parsing", Vec::new()),
        module("math", "Math", "Mathematical functions", Vec::new()),
        module("string", "String", "String manipulation", Vec::new()),
        module("array", "Array", "Array utilities", Vec::new()),
        module("date", "Date", "Date and time", Vec::new()),
        module("regex", "Regex", "Regular expressions", Vec::new()),
    ]
}

fn http_api() -> Vec<ApiMethod> {
    vec![
        method(
            "http.get(path, handler)",
            "Register a GET route handler",
            vec![
                param("path", "text", "URL path pattern (supports :param for params)"),
                param("handler", "conduit", "Function that receives request and returns response"),
            ],
            "http.get(\"/api/users/:id\", conduit(req) @\n    give http.json(200, @id: req.params.id#)\n#)",
        ),
        method(
            "http.post(path, handler)",
            "Register a POST route handler",
            vec![
                param("path", "text", "URL path pattern"),
                param("handler", "conduit", "Function that receives request and returns response"),
            ],
            "http.post(\"/api/users\", conduit(req) @\n    let data = req.body\n    give http.json(201, @created: yes#)\n#)",
        ),
        method(
            "http.json(status, data)",
            "Create a JSON response",
            vec![
                param("status", "num", "HTTP status code"),
                param("data", "map", "Data to serialize as JSON"),
            ],
            "give http.json(200, @message: \"Success\"#)",
        ),
        method(
            "http.html(status, content)",
            "Create an HTML response",
            vec![
                param("status", "num", "HTTP status code"),
                param("content", "text", "HTML content"),
            ],
            "give http.html(200, \"~h1!Hello!~/h1!\")",
        ),
        method(
            "http.serve(port)",
            "Start the HTTP server",
            vec![param("port", "num", "Port number to listen on")],
            "http.serve(8080)",
        ),
    ]
}

fn db_api() -> Vec<ApiMethod> {
    vec![
        method(
            "db.sql(connectionString)",
            "Connect to a SQL database",
            vec![param("connectionString", "text", "Database connection string")],
            "let conn = db.sql(\"sqlite:///app.db\")",
        ),
        method(
            "conn.table(name)",
            "Start a query on a table",
            vec![param("name", "text", "Table name")],
            "let users = conn.table(\"users\").get()",
        ),
        method(
            "-> where(column, operator, value)",
            "Add a WHERE clause",
            vec![
                param("column", "text", "Column name"),
                param("operator", "text", "Comparison operator (=, !=, >, <, etc.)"),
                param("value", "any", "Value to compare"),
            ],
            "conn.table(\"users\") -> where(\"age\", \">\", 18) -> get()",
        ),
        method(
            "-> order(column, direction)",
            "Add ORDER BY clause",
            vec![
                param("column", "text", "Column name"),
                param("direction", "text", "ASC or DESC"),
            ],
            "conn.table(\"users\") -> order(\"name\", \"ASC\") -> get()",
        ),
        method(
            "-> get()",
            "Execute query and return all results",
            Vec::new(),
            "let users = conn.table(\"users\").get()",
        ),
        method(
            "-> first()",
            "Execute query and return first result",
            Vec::new(),
            "let user = conn.table(\"users\") -> where(\"id\", 1) -> first()",
        ),
        method(
            ".insert(data)",
            "Insert a new record",
            vec![param("data", "map", "Record data")],
            "conn.table(\"users\").insert(@name: \"Alice\", age: 30#)",
        ),
    ]
}

fn crypto_api() -> Vec<ApiMethod> {
    vec![
        method(
            "crypto.hash(data)",
            "Create SHA-256 hash of data",
            vec![param("data", "text", "Data to hash")],
            "let hash = crypto.hash(\"secret data\")",
        ),
        method(
            "crypto.hashpass(password)",
            "Hash a password using bcrypt",
            vec![param("password", "text", "Password to hash")],
            "let hashed = crypto.hashpass(\"password123\")",
        ),
        method(
            "crypto.checkpass(password, hash)",
            "Verify a password against hash",
            vec![
                param("password", "text", "Password to verify"),
                param("hash", "text", "Hash to compare against"),
            ],
            "let valid = crypto.checkpass(\"password123\", hashed)",
        ),
        method(
            "crypto.token(payload, secret)",
            "Create a JWT token",
            vec![
                param("payload", "map", "Token payload data"),
                param("secret", "text", "Secret key"),
            ],
            "let token = crypto.token(@userId: 123#, \"secret\")",
        ),
        method(
            "crypto.verify(token, secret)",
            "Verify and decode a JWT token",
            vec![
                param("token", "text", "Token to verify"),
                param("secret", "text", "Secret key"),
            ],
            "let payload = crypto.verify(token, \"secret\")",
        ),
        method("crypto.uuid()", "Generate a random UUID", Vec::new(), "let id = crypto.uuid()"),
    ]
}

fn fs_api() -> Vec<ApiMethod> {
    vec![
        method(
            "fs.read(path)",
            "Read file contents",
            vec![param("path", "text", "File path")],
            "let content = fs.read(\"data.txt\")",
        ),
        method(
            "fs.write(path, content)",
            "Write content to file",
            vec![
                param("path", "text", "File path"),
                param("content", "text", "Content to write"),
            ],
            "fs.write(\"output.txt\", \"Hello, World!\")",
        ),
        method(
            "fs.exists(path)",
            "Check if file/directory exists",
            vec![param("path", "text", "Path to check")],
            "if fs.exists(\"config.json\") @ ... #",
        ),
        method(
            "fs.mkdir(path)",
            "Create a directory",
            vec![param("path", "text", "Directory path")],
            "fs.mkdir(\"uploads\")",
        ),
        method(
            "fs.list(path)",
            "List directory contents",
            vec![param("path", "text", "Directory path")],
            "let files = fs.list(\".\")",
        ),
    ]
}

fn languages() -> Vec<Language> {
    let language = |id, name, color| Language { id, name, color };
    vec![
        language("rift", "RIFT", "#7aa2f7"),
        language("python", "Python", "#3776ab"),
        language("javascript", "JavaScript", "#f7df1e"),
        language("php", "PHP", "#777bb4"),
        language("go", "Go", "#00add8"),
        language("rust", "Rust", "#ce422b"),
        language("ruby", "Ruby", "#cc342d"),
    ]
}

macro_rules! comparison {
    ($id:literal, $title:literal) => {
        Comparison {
            id: $id,
            title: $title,
            rift: include_str!(concat!("../content/comparison/", $id, "/rift.rift")).trim_end(),
            peers: vec![
                ("python", include_str!(concat!("../content/comparison/", $id, "/python.py")).trim_end()),
                ("javascript", include_str!(concat!("../content/comparison/", $id, "/javascript.js")).trim_end()),
                ("php", include_str!(concat!("../content/comparison/", $id, "/php.php")).trim_end()),
                ("go", include_str!(concat!("../content/comparison/", $id, "/go.go")).trim_end()),
                ("rust", include_str!(concat!("../content/comparison/", $id, "/rust.rs")).trim_end()),
                ("ruby", include_str!(concat!("../content/comparison/", $id, "/ruby.rb")).trim_end()),
            ],
        }
    };
}

fn comparisons() -> Vec<Comparison> {
    vec![
        comparison!("http_server", "HTTP Server"),
        comparison!("database", "Database Query"),
        comparison!("jwt_auth", "JWT Authentication"),
    ]
}

fn feature_matrix() -> Vec<FeatureRow> {
    let row = |feature, support| FeatureRow { feature, support };
    vec![
        row("Built-in HTTP Server", [true, false, false, false, true, false, false]),
        row("Built-in Database", [true, false, false, false, false, false, false]),
        row("Built-in Crypto/JWT", [true, false, false, false, false, false, false]),
        row("Built-in File System", [true, true, true, true, true, true, true]),
        row("No Package Manager Needed", [true, false, false, false, false, false, false]),
        row("One-Command Install", [true, false, false, false, true, true, false]),
        row("No Virtual Env Needed", [true, false, true, true, true, true, false]),
        row("Pattern Matching", [true, true, false, true, false, true, true]),
        row("Pipeline Operators", [true, false, false, false, false, false, false]),
        row("Async/Await", [true, true, true, false, true, true, false]),
    ]
}

fn setup() -> Vec<SetupSteps> {
    let steps = |language: &'static str, steps: &'static [&'static str]| SetupSteps { language, steps };
    vec![
        steps("rift", &["curl install.sh | bash", "rift script.rift"]),
        steps(
            "python",
            &[
                "Install Python",
                "Create virtual env",
                "Activate venv",
                "Create requirements.txt",
                "pip install",
                "python script.py",
            ],
        ),
        steps(
            "javascript",
            &[
                "Install Node.js",
                "npm init",
                "npm install deps",
                "Create package.json scripts",
                "node script.js",
            ],
        ),
        steps(
            "php",
            &[
                "Install PHP",
                "Install Composer",
                "composer init",
                "Install web server",
                "Configure server",
                "php script.php",
            ],
        ),
        steps("go", &["Install Go", "go mod init", "go get deps", "go run script.go"]),
        steps(
            "rust",
            &[
                "Install rustup",
                "cargo new project",
                "Add deps to Cargo.toml",
                "cargo build",
                "cargo run",
            ],
        ),
        steps(
            "ruby",
            &["Install Ruby", "Install Bundler", "bundle init", "bundle install", "ruby script.rb"],
        ),
    ]
}

fn channels() -> Vec<Channel> {
    vec![
        Channel {
            name: "GitHub",
            description: "Star the repo, report issues, and contribute code",
            url: REPO_URL,
            cta: "View Repository",
        },
        Channel {
            name: "Discord",
            description: "Join our Discord server for real-time chat and help",
            url: DISCORD_URL,
            cta: "Join Server",
        },
        Channel {
            name: "Twitter/X",
            description: "Follow for updates, tips, and community highlights",
            url: TWITTER_URL,
            cta: "Follow",
        },
    ]
}

fn contributions() -> Vec<Contribution> {
    let way = |title, description, link| Contribution {
        title,
        description,
        link,
    };
    vec![
        way(
            "Report Bugs",
            "Found a bug? Open an issue on GitHub with reproduction steps.",
            "https://github.com/FoundationINCCorporateTeam/RIFT/issues/new?labels=bug",
        ),
        way(
            "Suggest Features",
            "Have an idea? Open a feature request and discuss with the community.",
            "https://github.com/FoundationINCCorporateTeam/RIFT/issues/new?labels=enhancement",
        ),
        way(
            "Submit Pull Requests",
            "Fix bugs, add features, or improve documentation with a PR.",
            "https://github.com/FoundationINCCorporateTeam/RIFT/pulls",
        ),
        way(
            "Write Documentation",
            "Help improve our docs, tutorials, and examples.",
            "https://github.com/FoundationINCCorporateTeam/RIFT/tree/main/docs",
        ),
        way(
            "Create Examples",
            "Build example projects and share them with the community.",
            "/examples",
        ),
        way(
            "Spread the Word",
            "Tweet about RIFT, write blog posts, or tell your colleagues.",
            "https://twitter.com/intent/tweet?text=Check%20out%20RIFT%20-%20the%20backend%20language%20that%20just%20works!%20https://rift.astroyds.com",
        ),
    ]
}

fn resources() -> Vec<Link> {
    vec![
        Link::local("/docs", "Documentation"),
        Link::local("/examples", "Examples"),
        Link::external(REPO_URL, "GitHub Repository"),
        Link::local("/playground", "Playground"),
    ]
}
