//! Compiled-in roadmap definitions.
//!
//! Pure configuration: phase and node order is significant because progress
//! keys are positional. Append new nodes at the end of a phase.

use super::catalog::{
    Difficulty, Node, NodeTag, Phase, Resource, ResourceKind, Roadmap, RoadmapId, RoadmapKind,
};

use Difficulty::*;
use NodeTag::{Alternative as Alt, Optional as Opt, Required as Core};
use ResourceKind::*;
use RoadmapKind::*;

struct RoadmapDef {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    kind: RoadmapKind,
    difficulty: Difficulty,
    duration: &'static str,
    description: &'static str,
    about: &'static str,
    prereqs: &'static [&'static str],
    tags: &'static [&'static str],
    phases: &'static [PhaseDef],
    resources: &'static [ResourceDef],
}

struct PhaseDef {
    label: &'static str,
    nodes: &'static [NodeDef],
}

struct NodeDef {
    name: &'static str,
    tag: NodeTag,
    description: &'static str,
    subs: &'static [&'static str],
}

struct ResourceDef {
    kind: ResourceKind,
    title: &'static str,
    subtitle: &'static str,
}

const fn phase(label: &'static str, nodes: &'static [NodeDef]) -> PhaseDef {
    PhaseDef { label, nodes }
}

const fn node(
    name: &'static str,
    tag: NodeTag,
    description: &'static str,
    subs: &'static [&'static str],
) -> NodeDef {
    NodeDef {
        name,
        tag,
        description,
        subs,
    }
}

const fn res(kind: ResourceKind, title: &'static str, subtitle: &'static str) -> ResourceDef {
    ResourceDef {
        kind,
        title,
        subtitle,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl RoadmapDef {
    fn build(&self) -> Roadmap {
        Roadmap {
            id: RoadmapId::from_static(self.id),
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            kind: self.kind,
            difficulty: self.difficulty,
            duration: self.duration.to_string(),
            description: self.description.to_string(),
            about: self.about.to_string(),
            prereqs: strings(self.prereqs),
            tags: strings(self.tags),
            phases: self
                .phases
                .iter()
                .map(|p| Phase {
                    label: p.label.to_string(),
                    nodes: p
                        .nodes
                        .iter()
                        .map(|n| Node {
                            name: n.name.to_string(),
                            tag: n.tag,
                            description: n.description.to_string(),
                            subs: strings(n.subs),
                        })
                        .collect(),
                })
                .collect(),
            resources: self
                .resources
                .iter()
                .map(|r| Resource {
                    kind: r.kind,
                    title: r.title.to_string(),
                    subtitle: r.subtitle.to_string(),
                })
                .collect(),
        }
    }
}

pub(super) fn builtin_roadmaps() -> Vec<Roadmap> {
    ROADMAPS.iter().map(RoadmapDef::build).collect()
}

static ROADMAPS: &[RoadmapDef] = &[
    RoadmapDef {
        id: "frontend",
        icon: "🌐",
        title: "Frontend Developer",
        kind: Role,
        difficulty: Beginner,
        duration: "4–6 mo",
        description: "From HTML basics to React apps — everything to build modern, responsive UIs.",
        about: "The Frontend roadmap covers the full journey from raw HTML and CSS to JavaScript frameworks, testing, and deployment. You'll learn how browsers work, build accessible and responsive layouts, and ship production React apps.\n\nIdeal for beginners entering web dev or developers solidifying fundamentals.",
        prereqs: &["Basic computer skills", "Comfort with a text editor", "No prior coding needed"],
        tags: &["HTML", "CSS", "JavaScript", "React", "TypeScript", "Next.js", "Testing"],
        phases: &[
            phase("Internet Fundamentals", &[
                node("How the Web Works", Core, "HTTP/S, DNS, browsers, TCP/IP, clients vs servers.", &["HTTP request/response cycle", "What DNS does", "How browsers render", "TCP vs UDP"]),
                node("CLI & Terminal", Core, "Navigate the file system, run scripts.", &["cd, ls, mkdir, rm", "Running npm scripts", "Environment variables", "SSH basics"]),
            ]),
            phase("HTML", &[
                node("HTML Basics", Core, "Document structure, tags, attributes, nesting.", &["Doctype, head, body", "Headings, paragraphs, links", "Lists, tables, images"]),
                node("Semantic HTML", Core, "Meaningful markup for accessibility and SEO.", &["article, section, nav, aside", "header, footer, main", "figure, time, address"]),
                node("Forms & Validation", Core, "Input types, labels, HTML5 constraints.", &["input types (email, date, range)", "required, pattern, min/max", "Fieldset & legend"]),
                node("Web Accessibility", Core, "ARIA, keyboard nav, WCAG 2.1 basics.", &["alt text & ARIA labels", "Focus management", "Colour contrast", "Screen reader testing"]),
            ]),
            phase("CSS", &[
                node("CSS Fundamentals", Core, "Selectors, box model, cascade, specificity.", &["Class, ID, pseudo selectors", "Margin, padding, border", "Specificity rules", "Inheritance & cascade"]),
                node("Flexbox", Core, "One-dimensional, row/column layouts.", &["flex-direction, justify-content", "align-items, flex-wrap", "flex-grow / shrink / basis"]),
                node("CSS Grid", Core, "Two-dimensional layouts.", &["grid-template-columns/rows", "grid-area, span", "auto-fill / minmax", "Named grid lines"]),
                node("Responsive Design", Core, "Media queries, mobile-first, fluid type.", &["@media breakpoints", "Viewport meta tag", "clamp(), min(), max()", "Container queries"]),
                node("CSS Custom Properties", Core, "Variables and theming.", &["--var declaration", "var() usage", "Dark mode toggle", "Theme tokens"]),
                node("Animations & Transitions", Opt, "@keyframes, transitions, transforms.", &["transition shorthand", "@keyframes animation", "transform properties", "will-change hints"]),
                node("Tailwind CSS", Alt, "Utility-first rapid UI building.", &["Core utility classes", "Responsive prefixes", "Dark mode variant", "@apply directive"]),
            ]),
            phase("JavaScript", &[
                node("JS Fundamentals", Core, "Variables, types, operators, control flow.", &["let, const, var", "Type coercion", "if/else, switch, ternary", "for, while, for…of"]),
                node("Functions & Scope", Core, "Closures, hoisting, arrow functions.", &["Arrow vs regular", "Closures & lexical scope", "Hoisting behaviour", "Default & rest params"]),
                node("DOM Manipulation", Core, "Select, modify, create elements.", &["querySelector / getElementById", "createElement, appendChild", "classList toggle/add/remove", "innerHTML vs textContent"]),
                node("Events", Core, "Listeners, bubbling, delegation.", &["addEventListener", "Event object & preventDefault", "Bubbling & capturing", "Event delegation pattern"]),
                node("Async JavaScript", Core, "Promises, async/await, fetch API.", &["Callback functions", "Promise .then/.catch/.finally", "async / await", "fetch & error handling"]),
                node("ES6+ Features", Core, "Modern syntax every JS dev must know.", &["Destructuring", "Spread & rest operators", "Template literals", "Optional chaining ?.", "Nullish coalescing ??"]),
                node("Modules (ESM)", Core, "import / export, dynamic imports.", &["Named vs default exports", "Dynamic import()", "Module bundlers overview"]),
            ]),
            phase("Version Control", &[
                node("Git Basics", Core, "Commits, branches, merging.", &["git init, add, commit", "git branch, checkout, merge", "Merge conflicts", ".gitignore"]),
                node("GitHub Workflow", Core, "Remote repos, pull requests, code review.", &["push, pull, fetch", "Fork & PR workflow", "Code review etiquette", "GitHub Actions intro"]),
            ]),
            phase("Tooling", &[
                node("Package Managers", Core, "npm / yarn / pnpm — install, scripts, semver.", &["npm install, run, audit", "package.json & lockfiles", "Semantic versioning", "Monorepo basics"]),
                node("Module Bundlers", Core, "Vite / Webpack — how bundling works.", &["What bundlers do", "Vite dev server & HMR", "Code splitting", "Tree shaking"]),
                node("TypeScript", Opt, "Static types for safer, scalable JS.", &["Type annotations & inference", "Interfaces & type aliases", "Generics", "tsconfig.json", "TS with React"]),
            ]),
            phase("Frameworks", &[
                node("React.js", Core, "Most popular UI library — components, hooks, state.", &["JSX syntax", "Functional components", "useState, useEffect", "useContext, useRef", "Custom hooks", "React DevTools"]),
                node("Vue.js", Alt, "Progressive framework with gentle learning curve.", &["Options vs Composition API", "v-bind, v-on, v-if, v-for", "Pinia state management", "Vue Router"]),
                node("Next.js", Opt, "React meta-framework with SSR, SSG, API routes.", &["App Router vs Pages Router", "Server & Client components", "Server Actions", "Image & Font optimisation"]),
                node("State Management", Core, "Zustand, Redux Toolkit, React Query.", &["When to use global state", "Zustand stores", "Redux Toolkit slice", "React Query for server state"]),
            ]),
            phase("Testing & Deployment", &[
                node("Unit Testing", Core, "Vitest / Jest for testing functions.", &["describe, it, expect", "Mocking modules", "Code coverage"]),
                node("Component Testing", Core, "React Testing Library.", &["render, screen, fireEvent", "getByRole / getByText", "user-event library"]),
                node("Web Performance", Core, "Core Web Vitals, LCP, CLS, optimisation.", &["Lighthouse audit", "Image optimisation", "Lazy loading", "Caching strategies"]),
                node("Deployment", Core, "Vercel, Netlify, GitHub Pages.", &["Static vs dynamic hosting", "Env variables", "Preview deploys", "Custom domains & SSL"]),
            ]),
        ],
        resources: &[
            res(Article, "MDN Web Docs", "Mozilla · Definitive web reference"),
            res(Course, "The Odin Project", "Free full-stack curriculum"),
            res(Course, "Frontend Masters", "Premium industry-expert courses"),
            res(Video, "Traversy Media – YouTube", "Practical web dev crash courses"),
            res(Docs, "React Documentation", "react.dev — hooks, patterns"),
            res(Book, "You Don't Know JS", "Kyle Simpson · Free on GitHub"),
        ],
    },
    RoadmapDef {
        id: "backend",
        icon: "⚙️",
        title: "Backend Developer",
        kind: Role,
        difficulty: Intermediate,
        duration: "5–8 mo",
        description: "APIs, databases, auth, and scalable server-side systems.",
        about: "Build production-grade REST APIs, design relational databases, implement auth flows, and deploy containerised services. Covers Node.js, PostgreSQL, Redis, Docker, and CI/CD.\n\nSuited for developers who know a scripting language and want to specialise in server logic and data.",
        prereqs: &["Basic programming in any language", "Familiarity with terminal", "HTTP basics"],
        tags: &["Node.js", "Express", "PostgreSQL", "Redis", "Docker", "Auth", "REST", "GraphQL"],
        phases: &[
            phase("Choose a Language", &[
                node("Node.js", Core, "JS runtime — event loop, non-blocking I/O, npm.", &["Event loop mechanics", "CommonJS vs ESM", "Built-in modules (fs, path, http)", "npm ecosystem"]),
                node("Python (FastAPI / Django)", Alt, "Readable, ecosystem-rich language.", &["FastAPI async endpoints", "Django ORM", "pip & virtualenv", "Type hints"]),
                node("Go", Alt, "High-performance compiled language.", &["Goroutines & channels", "net/http stdlib", "Go modules", "Struct patterns"]),
            ]),
            phase("HTTP & API Design", &[
                node("HTTP Deep Dive", Core, "Methods, headers, status codes, caching.", &["GET/POST/PUT/PATCH/DELETE", "Content-Type & Accept", "Status codes (2xx/4xx/5xx)", "Cache-Control headers"]),
                node("REST API Design", Core, "Resource naming, versioning, best practices.", &["Resource naming conventions", "API versioning (/v1/)", "Pagination & filtering", "HATEOAS overview"]),
                node("Express.js / Fastify", Core, "Node.js web framework.", &["Routing & middleware", "Request/response object", "Error-handling middleware", "Request validation (Zod)"]),
                node("GraphQL", Alt, "Schema-first flexible query API.", &["Schema & type system", "Queries, mutations, subscriptions", "Resolvers", "Apollo Server / Yoga"]),
                node("WebSockets & SSE", Opt, "Real-time bidirectional communication.", &["WebSocket handshake", "Socket.IO rooms", "Server-Sent Events", "When to choose each"]),
            ]),
            phase("Databases", &[
                node("SQL — PostgreSQL", Core, "Relational DB — joins, indexes, transactions.", &["CREATE / INSERT / SELECT / UPDATE / DELETE", "INNER, LEFT, RIGHT JOINs", "Indexes & EXPLAIN ANALYZE", "ACID transactions", "Foreign keys & constraints"]),
                node("ORM — Prisma / Drizzle", Core, "Type-safe database access layer.", &["Schema definition & migrations", "CRUD with ORM", "Relations: 1-many, many-many", "Raw SQL when needed"]),
                node("NoSQL — MongoDB", Opt, "Document store for flexible schemas.", &["Collections & documents", "Aggregation pipeline", "Atlas Search", "Change streams"]),
                node("Redis", Opt, "In-memory store for caching, sessions, queues.", &["Key-value operations", "TTL & expiry", "Pub/Sub", "BullMQ job queues"]),
                node("Database Design", Core, "Normalisation, ERDs, schema patterns.", &["1NF / 2NF / 3NF", "Entity-relationship diagrams", "Soft deletes & audit logs", "Multi-tenancy patterns"]),
            ]),
            phase("Auth & Security", &[
                node("Auth Fundamentals", Core, "Sessions, cookies, JWT — how auth works.", &["Cookie-based sessions", "JWT structure & signing", "Refresh token rotation", "Secure cookie flags"]),
                node("OAuth 2.0 & OIDC", Core, "Social login & third-party auth flows.", &["Authorization code + PKCE", "Social providers (Google, GitHub)", "Auth0 / Clerk / Supabase Auth", "ID tokens vs access tokens"]),
                node("Password Security", Core, "Hashing, salting, secure storage.", &["bcrypt / argon2", "Never plaintext", "Login rate limiting", "MFA / TOTP"]),
                node("API Security (OWASP)", Core, "Injection, XSS, CSRF, CORS, rate limiting.", &["SQL injection prevention", "XSS & CSRF protection", "CORS configuration", "Helmet.js security headers", "Rate limiting & throttling"]),
            ]),
            phase("Architecture", &[
                node("MVC & Layered Architecture", Core, "Controllers, services, repositories.", &["Controller → Service → Repository", "Separation of concerns", "Dependency injection", "DTO validation"]),
                node("Background Jobs & Queues", Opt, "Async processing with job queues.", &["BullMQ with Redis", "Cron-scheduled jobs", "Retry & dead-letter queues"]),
                node("Microservices", Opt, "Service decomposition & messaging.", &["Monolith vs microservices tradeoffs", "REST vs Kafka / RabbitMQ", "Service discovery", "API gateway pattern"]),
            ]),
            phase("Testing & Deployment", &[
                node("API Testing", Core, "Jest/Vitest + Supertest for route testing.", &["Testing service logic", "Supertest HTTP assertions", "DB test setup/teardown", "Mocking dependencies"]),
                node("Docker", Core, "Containerise your app.", &["Dockerfile basics", "docker-compose for local dev", "Multi-stage builds", "Container registries"]),
                node("CI/CD — GitHub Actions", Core, "Automated test + deploy pipelines.", &["Workflow YAML syntax", "Run tests on PR", "Deploy to Railway / Render", "Secrets management"]),
                node("Logging & Monitoring", Core, "Structured logs, error tracking, health checks.", &["Pino / Winston logging", "Log levels & structured JSON", "Sentry for errors", "Health check endpoints"]),
            ]),
        ],
        resources: &[
            res(Course, "Node.js — The Complete Guide", "Udemy · Maximilian Schwarzmüller"),
            res(Docs, "PostgreSQL Documentation", "postgresql.org · Full SQL reference"),
            res(Video, "Fireship — YouTube", "Dense backend & full-stack videos"),
            res(Docs, "Prisma Docs", "prisma.io · Modern ORM for Node/TS"),
            res(Book, "Designing Data-Intensive Applications", "Kleppmann — architecture bible"),
        ],
    },
    RoadmapDef {
        id: "devops",
        icon: "🚀",
        title: "DevOps Engineer",
        kind: Role,
        difficulty: Advanced,
        duration: "6–10 mo",
        description: "Containers, CI/CD, cloud infra, monitoring, and SRE practices.",
        about: "DevOps bridges development and operations. You'll master Docker, Kubernetes, Terraform, GitHub Actions, AWS, and observability tooling.\n\nBest for backend developers who want to specialise in infrastructure and deployment automation.",
        prereqs: &["Comfortable with Linux & terminal", "Basic networking knowledge", "Experience with one backend language"],
        tags: &["Linux", "Docker", "Kubernetes", "Terraform", "AWS", "GitHub Actions", "Prometheus"],
        phases: &[
            phase("Linux & Networking", &[
                node("Linux Fundamentals", Core, "Filesystem, processes, permissions, shell.", &["Filesystem hierarchy (/etc, /var)", "chmod, chown, users & groups", "ps, kill, htop, systemd", "Cron jobs"]),
                node("Bash Scripting", Core, "Automate tasks with shell scripts.", &["Variables, loops, conditionals", "Functions & arguments", "Exit codes & error handling", "Heredoc & pipes"]),
                node("Networking Basics", Core, "TCP/IP, DNS, HTTP, firewalls, load balancers.", &["OSI model", "IP & subnets", "DNS resolution", "TCP vs UDP", "UFW & iptables basics"]),
                node("SSH & Server Hardening", Core, "Keys, tunnels, securing Linux servers.", &["SSH key generation", "Port forwarding", "Fail2ban & UFW", "Hardening checklist"]),
            ]),
            phase("Containers", &[
                node("Docker", Core, "Build, ship, run containerised applications.", &["Dockerfile instructions", "Images vs containers", "Volumes & bind mounts", "docker-compose.yml", "Multi-stage builds", "Container registries"]),
                node("Container Networking", Core, "Bridge, host, overlay networks.", &["Bridge network (default)", "Port binding (-p)", "Docker DNS", "Network isolation"]),
                node("Kubernetes (K8s)", Core, "Container orchestration at scale.", &["Pods, Deployments, StatefulSets", "Services (ClusterIP/NodePort/LB)", "ConfigMaps & Secrets", "Ingress controllers", "Persistent Volumes", "Helm charts", "kubectl mastery"]),
                node("Service Mesh", Opt, "Istio / Linkerd for service-to-service comms.", &["Sidecar proxy pattern", "mTLS between services", "Traffic management & canary", "Observability via mesh"]),
            ]),
            phase("CI/CD", &[
                node("GitHub Actions", Core, "Automate build, test, and deploy.", &["Workflow YAML syntax", "Jobs, steps, runners", "Secrets & env vars", "Matrix builds", "Reusable workflows"]),
                node("GitLab CI / Jenkins", Alt, "Enterprise CI/CD alternatives.", &[".gitlab-ci.yml pipelines", "Jenkins Groovy DSL", "Artifact management"]),
                node("GitOps — ArgoCD", Opt, "Declarative cluster state from Git.", &["GitOps principles", "ArgoCD app definitions", "Sync policies & rollbacks"]),
            ]),
            phase("Cloud & IaC", &[
                node("AWS Core Services", Core, "EC2, S3, IAM, VPC, RDS — the essentials.", &["IAM users, roles, policies", "EC2 instances & AMIs", "S3 buckets & lifecycle", "VPC, subnets, security groups", "RDS & Aurora", "Lambda", "CloudFront CDN"]),
                node("Terraform", Core, "Infrastructure as Code (HCL).", &["HCL resources, variables, outputs", "State (local vs remote)", "Modules & reusability", "plan / apply / destroy", "Drift detection"]),
                node("Ansible", Opt, "Config management & provisioning.", &["Playbooks & roles", "Inventory files", "Idempotent tasks", "Ansible Vault"]),
            ]),
            phase("Observability", &[
                node("Logging — ELK / Loki", Core, "Centralise, search, alert on logs.", &["Structured JSON logs", "Fluentd / Vector shipping", "Elasticsearch / Loki storage", "Kibana / Grafana dashboards"]),
                node("Metrics — Prometheus + Grafana", Core, "Scrape and visualise system metrics.", &["Prometheus exporters", "PromQL queries", "AlertManager rules", "Grafana dashboards"]),
                node("Distributed Tracing", Opt, "Jaeger / Tempo for microservice traces.", &["OpenTelemetry SDK", "Trace sampling", "Span attributes", "Correlating logs, metrics, traces"]),
                node("SRE Practices", Core, "SLIs, SLOs, error budgets, on-call.", &["Service Level Indicators", "Error budgets & SLOs", "Runbooks & postmortems", "Incident management"]),
            ]),
        ],
        resources: &[
            res(Course, "KodeKloud DevOps Path", "Hands-on labs & certifications"),
            res(Docs, "Kubernetes Documentation", "kubernetes.io · Official reference"),
            res(Video, "TechWorld with Nana", "YouTube · DevOps for beginners"),
            res(Course, "AWS SAA-C03", "A Cloud Guru / Adrian Cantrill"),
            res(Book, "The DevOps Handbook", "Kim, Humble, Debois, Willis"),
        ],
    },
    RoadmapDef {
        id: "fullstack",
        icon: "⚡",
        title: "Full Stack Developer",
        kind: Role,
        difficulty: Intermediate,
        duration: "8–12 mo",
        description: "Build complete web apps — from pixel-perfect UIs to production APIs and databases.",
        about: "Full Stack combines frontend and backend into one cohesive path. Build with React + TypeScript on the frontend, Node.js + PostgreSQL on the backend, then stitch it together with Next.js and deploy.\n\nIdeal for developers who want to own entire features end-to-end.",
        prereqs: &["Basic HTML/CSS/JS", "Comfortable with terminal", "Familiarity with one programming concept"],
        tags: &["React", "TypeScript", "Node.js", "PostgreSQL", "Next.js", "Docker", "Prisma"],
        phases: &[
            phase("Frontend Foundation", &[
                node("HTML + CSS + Vanilla JS", Core, "Solid base before any framework.", &["Semantic HTML5", "CSS Grid & Flexbox", "ES6+ JavaScript", "DOM manipulation"]),
                node("React + TypeScript", Core, "Component-based UI with type safety.", &["JSX & functional components", "Hooks: useState, useEffect, useRef", "React Router v6", "TS generics & utility types"]),
                node("Tailwind + UI Libraries", Opt, "Fast, consistent UI building.", &["Tailwind utility classes", "shadcn/ui components", "Framer Motion animations", "Radix UI primitives"]),
            ]),
            phase("Backend Foundation", &[
                node("Node.js + Express / Fastify", Core, "REST APIs with Node.js.", &["Routing & middleware", "Zod validation", "File uploads", "Error handling"]),
                node("PostgreSQL + Prisma", Core, "Relational data modelling with type-safe ORM.", &["Schema design", "Migrations", "One-to-many, many-to-many", "Seeding & fixtures"]),
                node("JWT Auth + OAuth", Core, "Secure auth from scratch.", &["JWT creation & verification", "Refresh tokens", "Google / GitHub OAuth", "Protected routes & middleware"]),
            ]),
            phase("Full Stack Integration", &[
                node("Next.js App Router", Core, "Full-stack React framework.", &["Server & Client components", "Server Actions", "Metadata & SEO", "next/image & next/font"]),
                node("tRPC + React Query", Opt, "End-to-end typesafe API layer.", &["tRPC routers & procedures", "React Query mutations", "Optimistic updates", "Infinite queries"]),
                node("Real-time (WebSockets)", Opt, "Live updates with Socket.IO.", &["WebSocket server setup", "Socket.IO rooms", "Presence & typing indicators", "SSE as lighter alternative"]),
            ]),
            phase("Deploy & Scale", &[
                node("Docker + CI/CD", Core, "Containerise and automate.", &["Multi-stage Dockerfile", "docker-compose for dev", "GitHub Actions pipeline"]),
                node("Cloud Deployment", Core, "Vercel / Railway / Render / AWS.", &["Env variable management", "DB hosting (Neon, Supabase, Railway)", "Domain & SSL setup", "Preview deployments"]),
            ]),
        ],
        resources: &[
            res(Course, "Full Stack Open", "Univ. of Helsinki · Free & comprehensive"),
            res(Video, "Theo (t3.gg) — YouTube", "T3 stack: Next.js, TypeScript, tRPC"),
            res(Docs, "Next.js Documentation", "nextjs.org · App Router reference"),
        ],
    },
    RoadmapDef {
        id: "ai-ml",
        icon: "🤖",
        title: "AI / ML Engineer",
        kind: Role,
        difficulty: Advanced,
        duration: "8–14 mo",
        description: "Linear regression to LLMs, RAG pipelines, and production ML systems.",
        about: "The deepest technical roadmap here. You'll build a mathematical foundation, learn classical ML, then deep learning and modern LLM tooling including fine-tuning and RAG.\n\nSuited for Python-comfortable developers ready to specialise in AI.",
        prereqs: &["Python proficiency", "Basic calculus & linear algebra", "Statistics fundamentals"],
        tags: &["Python", "PyTorch", "Scikit-learn", "LLMs", "RAG", "MLOps", "Transformers"],
        phases: &[
            phase("Mathematics", &[
                node("Linear Algebra", Core, "Vectors, matrices — the backbone of ML.", &["Vectors & dot products", "Matrix multiplication", "Eigenvalues & eigenvectors", "SVD decomposition"]),
                node("Calculus & Optimisation", Core, "Derivatives, gradients, gradient descent.", &["Derivatives & chain rule", "Partial derivatives", "Gradient descent variants", "Learning rate schedules"]),
                node("Statistics & Probability", Core, "Distributions, Bayes, hypothesis testing.", &["Probability distributions", "Bayes theorem", "CLT", "Hypothesis testing & p-values"]),
            ]),
            phase("Python for Data Science", &[
                node("NumPy", Core, "N-dimensional arrays & vectorised ops.", &["ndarray creation & indexing", "Broadcasting", "Linear algebra ops", "Random number generation"]),
                node("Pandas", Core, "Data manipulation & analysis.", &["DataFrame & Series", "Data cleaning", "GroupBy & aggregation", "Merge & join"]),
                node("Matplotlib & Seaborn", Core, "Visualise data & model results.", &["Line, scatter, bar, hist", "Heatmaps & pairplots", "Subplots & figure customisation"]),
            ]),
            phase("Classical ML", &[
                node("Scikit-learn", Core, "Industry-standard ML library.", &["Train/test split", "Cross-validation", "Pipeline API", "Evaluation metrics (F1, AUC)"]),
                node("Supervised Learning", Core, "Regression & classification.", &["Linear & logistic regression", "Decision trees & random forests", "SVMs", "XGBoost / LightGBM"]),
                node("Unsupervised Learning", Opt, "Clustering & dimensionality reduction.", &["K-Means & DBSCAN", "PCA & t-SNE", "Autoencoders", "Anomaly detection"]),
                node("Feature Engineering", Core, "Transform raw data into model inputs.", &["Imputation strategies", "Encoding categoricals", "Scaling & normalisation", "Feature selection"]),
            ]),
            phase("Deep Learning", &[
                node("Neural Networks", Core, "Perceptrons, backprop, activations.", &["MLP architecture", "Forward pass", "Backpropagation", "Activation functions (ReLU, GELU)", "Loss functions"]),
                node("PyTorch", Core, "Leading deep learning framework.", &["Tensors & autograd", "nn.Module & layers", "Training loops", "DataLoader & Datasets", "CUDA / GPU training"]),
                node("Computer Vision (CNNs)", Opt, "Image models with PyTorch.", &["Conv layers, pooling, strides", "ResNet / EfficientNet", "Transfer learning", "YOLO object detection"]),
            ]),
            phase("LLMs & Generative AI", &[
                node("Transformer Architecture", Core, "Self-attention, BERT, GPT internals.", &["Self-attention mechanism", "Multi-head attention", "Positional encoding", "Encoder vs decoder"]),
                node("Fine-tuning LLMs", Core, "Adapt pre-trained models to new tasks.", &["Full fine-tuning vs PEFT", "LoRA & QLoRA", "Instruction tuning", "Evaluation benchmarks"]),
                node("RAG Pipelines", Core, "Retrieval-Augmented Generation.", &["Embedding models", "Vector DBs (Pinecone, pgvector)", "Chunking strategies", "Re-ranking & hybrid search"]),
                node("Prompt Engineering", Core, "Get better outputs from LLMs.", &["Zero/few-shot prompting", "Chain-of-thought (CoT)", "ReAct agents", "Structured output (JSON mode)"]),
                node("LangChain / LlamaIndex", Opt, "LLM application frameworks.", &["Chains & pipelines", "Agents & tools", "Memory patterns", "Document loaders"]),
            ]),
            phase("MLOps", &[
                node("Experiment Tracking — MLflow", Core, "Track runs, params, metrics, models.", &["Tracking server", "Logging params & metrics", "Model registry", "Artifact storage"]),
                node("Model Serving", Core, "FastAPI or BentoML inference endpoints.", &["FastAPI prediction route", "Model versioning", "Batch vs online inference", "GPU serving"]),
                node("Data Versioning — DVC", Opt, "Version datasets like code.", &["dvc init & remote", "DVC pipelines", "Dataset versioning workflow"]),
                node("Model Monitoring", Core, "Data drift, decay, alerting.", &["Data drift detection (Evidently)", "A/B testing models", "Retraining triggers"]),
            ]),
        ],
        resources: &[
            res(Course, "fast.ai Practical Deep Learning", "free · top-down approach"),
            res(Video, "Andrej Karpathy — YouTube", "Neural Nets: Zero to Hero"),
            res(Course, "Deep Learning Specialisation", "Andrew Ng · Coursera"),
            res(Docs, "Hugging Face Docs", "Transformers, Datasets, PEFT"),
            res(Book, "Hands-On ML (3rd Ed)", "Aurélien Géron · O'Reilly"),
        ],
    },
    RoadmapDef {
        id: "cybersecurity",
        icon: "🛡️",
        title: "Cybersecurity Engineer",
        kind: Role,
        difficulty: Advanced,
        duration: "6–12 mo",
        description: "Offensive & defensive security — pen testing, threat modelling, incident response.",
        about: "Covers both red team (attacking) and blue team (defending). You'll learn how attacks work at a technical level and how to build and maintain secure systems.\n\nHigh demand field — requires Linux proficiency and network fundamentals as a baseline.",
        prereqs: &["Linux proficiency", "Networking fundamentals (TCP/IP, DNS)", "Basic Python or Bash scripting"],
        tags: &["Linux", "Nmap", "OWASP", "Metasploit", "Wireshark", "SIEM", "Cryptography"],
        phases: &[
            phase("Foundations", &[
                node("Networking & Protocols", Core, "TCP/IP, DNS, HTTP, TLS at a security level.", &["OSI & TCP/IP model", "Packet analysis with Wireshark", "DNS, DHCP, ARP", "TLS handshake & PKI"]),
                node("OS Internals", Core, "Linux & Windows internals for security.", &["Linux privilege model", "Windows Active Directory", "Process & memory management", "File permissions & ACLs"]),
                node("Cryptography", Core, "Encryption, hashing, PKI, certificates.", &["Symmetric vs asymmetric", "AES, RSA, ECC", "Hash functions (SHA-256, bcrypt)", "TLS certs & PKI", "Digital signatures"]),
            ]),
            phase("Offensive Security", &[
                node("Reconnaissance", Core, "OSINT, scanning, enumeration.", &["OSINT techniques", "Nmap port scanning", "Service enumeration", "Shodan & Censys", "Subdomain enumeration"]),
                node("Web App Attacks (OWASP Top 10)", Core, "SQLi, XSS, CSRF, IDOR, SSRF.", &["SQL Injection", "Cross-Site Scripting (XSS)", "CSRF & clickjacking", "IDOR & broken access control", "SSRF vulnerabilities"]),
                node("Network Attacks", Opt, "MITM, ARP spoofing, sniffing.", &["ARP poisoning", "Man-in-the-middle", "Password sniffing", "Evil-twin Wi-Fi"]),
                node("Exploitation", Opt, "Metasploit, privilege escalation.", &["Metasploit basics", "Common CVEs", "Linux privesc", "Windows privesc"]),
            ]),
            phase("Defensive Security", &[
                node("SIEM & Log Analysis", Core, "Splunk / Elastic — centralise and hunt.", &["Log normalisation", "SIEM correlation rules", "Splunk SPL queries", "Alert fatigue management"]),
                node("Incident Response", Core, "Detection, containment, forensics, recovery.", &["IR lifecycle (PICERL)", "Evidence preservation", "Memory forensics (Volatility)", "Timeline analysis"]),
                node("Vulnerability Management", Core, "Scanning, patching, risk scoring.", &["Nessus / OpenVAS", "CVSS scoring", "Patch management lifecycle", "Responsible disclosure"]),
                node("Cloud Security", Core, "IAM misconfigs, exposed buckets, cloud attacks.", &["IAM least privilege", "S3 bucket security", "CloudTrail auditing", "Secrets management (Vault)"]),
            ]),
            phase("DevSecOps", &[
                node("Shift Left Security", Opt, "Security baked into CI/CD.", &["SAST / DAST in CI pipelines", "Dependency scanning (Snyk)", "Container scanning (Trivy)", "Secret scanning in Git"]),
                node("Zero Trust Architecture", Opt, "Identity-centric, perimeter-less security.", &["Microsegmentation", "Just-in-time access", "SASE / SSE frameworks"]),
            ]),
        ],
        resources: &[
            res(Course, "TryHackMe", "tryhackme.com · Gamified learning"),
            res(Course, "HackTheBox Academy", "hackthebox.com · Hands-on labs"),
            res(Video, "NetworkChuck — YouTube", "Security & networking for beginners"),
            res(Article, "OWASP Foundation", "owasp.org · Web security standards"),
        ],
    },
    RoadmapDef {
        id: "mobile",
        icon: "📱",
        title: "React Native Developer",
        kind: Role,
        difficulty: Intermediate,
        duration: "4–7 mo",
        description: "Native-quality iOS & Android apps with JavaScript and Expo.",
        about: "Build genuinely native mobile apps with React Native and Expo. This roadmap goes from project setup to publishing on App Store and Google Play, covering navigation, native APIs, and state management.\n\nRequires React.js fundamentals.",
        prereqs: &["React.js fundamentals", "Basic JavaScript", "npm / yarn experience"],
        tags: &["React Native", "Expo", "TypeScript", "iOS", "Android", "Navigation", "AsyncStorage"],
        phases: &[
            phase("Core RN", &[
                node("Expo Setup", Core, "Project scaffolding with Expo managed workflow.", &["create-expo-app", "Expo Go testing", "Metro bundler", "File structure overview"]),
                node("Core Components", Core, "View, Text, Image, ScrollView, FlatList.", &["View & Text", "StyleSheet API", "FlatList & SectionList", "SafeAreaView", "KeyboardAvoidingView"]),
                node("Styling", Core, "Flexbox-based styling (column by default).", &["Flexbox in RN", "Absolute positioning", "Platform-specific styles", "NativeWind (Tailwind)"]),
                node("Touch & Gestures", Core, "Pressable, Gesture Handler, Reanimated.", &["Pressable & onPress", "react-native-gesture-handler", "react-native-reanimated", "Haptic feedback"]),
            ]),
            phase("Navigation", &[
                node("Expo Router", Core, "File-based routing for React Native.", &["Stack, tabs, drawer", "Dynamic routes", "Deep links", "Route params"]),
                node("React Navigation", Alt, "Traditional navigation library.", &["Stack navigator", "Bottom tabs", "Drawer navigator", "Nested navigators"]),
            ]),
            phase("State & Data", &[
                node("State Management", Core, "Zustand or Redux Toolkit.", &["Zustand stores", "React Query (TanStack)", "MMKV persistence", "Context API limits"]),
                node("Networking", Core, "Fetch, Axios, React Query.", &["fetch vs axios", "React Query mutations", "Loading & error states", "Optimistic updates"]),
                node("Local Storage", Core, "AsyncStorage, SQLite, MMKV, SecureStore.", &["AsyncStorage basics", "MMKV (fast)", "expo-sqlite", "SecureStore for tokens"]),
            ]),
            phase("Native APIs & Publishing", &[
                node("Camera & Media", Opt, "expo-camera, image picker, video.", &["expo-camera permissions", "expo-image-picker", "expo-av audio/video"]),
                node("Push Notifications", Core, "expo-notifications, APNs, FCM.", &["Permission flow", "Expo push tokens", "Local notifications", "Background notifications"]),
                node("Location & Maps", Opt, "expo-location, react-native-maps.", &["Foreground & background location", "Maps integration", "Places API", "Geofencing"]),
                node("App Store & Google Play", Core, "Signing, TestFlight, Play Console.", &["Apple Developer account", "Bundle ID & certs", "TestFlight beta", "Keystore & signing", "AAB vs APK"]),
            ]),
        ],
        resources: &[
            res(Docs, "React Native Docs", "reactnative.dev"),
            res(Docs, "Expo Documentation", "docs.expo.dev"),
            res(Video, "Simon Grimm — YouTube", "Expo Router & RN tutorials"),
            res(Course, "RN — Zero to Mastery", "Udemy comprehensive course"),
        ],
    },
    RoadmapDef {
        id: "typescript",
        icon: "🔷",
        title: "TypeScript",
        kind: Skill,
        difficulty: Beginner,
        duration: "2–4 wk",
        description: "Add static types to JavaScript for safer, more maintainable codebases.",
        about: "TypeScript is a superset of JavaScript adding optional static typing. It compiles to plain JS and integrates with any project. Teams that adopt TypeScript typically see fewer runtime bugs and dramatically better IDE support.\n\nLearn it once, use it everywhere.",
        prereqs: &["JavaScript fundamentals", "ES6+ syntax (arrow functions, destructuring, modules)"],
        tags: &["TypeScript", "Types", "Generics", "Utility Types", "React", "Node.js"],
        phases: &[
            phase("Core Types", &[
                node("Primitive Types", Core, "string, number, boolean, null, undefined, any, unknown, never.", &["Type annotations", "Type inference", "any vs unknown", "never type use cases"]),
                node("Object Types", Core, "Interface vs type alias, optional, readonly.", &["interface definition", "type alias syntax", "Optional (?) & readonly", "Index signatures"]),
                node("Arrays & Tuples", Core, "Typed arrays and fixed-length tuples.", &["Array<T> vs T[]", "Tuple types", "Rest elements in tuples"]),
                node("Union & Intersection", Core, "Combine types with | and &.", &["Union types (A | B)", "Intersection (A & B)", "Discriminated unions", "Type guards (typeof, in, instanceof)"]),
            ]),
            phase("Advanced Types", &[
                node("Generics", Core, "Reusable, type-safe functions and classes.", &["Generic functions <T>", "Generic interfaces", "Constraints (extends)", "Default type params"]),
                node("Utility Types", Core, "Partial, Required, Pick, Omit, Record, etc.", &["Partial<T>, Required<T>", "Pick<T,K>, Omit<T,K>", "Record<K,V>", "ReturnType<F>, Parameters<F>"]),
                node("Conditional Types", Opt, "Type-level if/else.", &["T extends U ? X : Y", "infer keyword", "Distributive conditional types"]),
                node("Mapped Types", Opt, "Transform object types programmatically.", &["{ [K in keyof T]: ... }", "+readonly, -? modifiers", "Key remapping with as"]),
                node("Template Literal Types", Opt, "Construct string types dynamically.", &["`${string}` types", "Union + template literal", "Uppercase/Lowercase helpers"]),
            ]),
            phase("TS in Practice", &[
                node("tsconfig.json", Core, "Compiler flags, strict mode, paths.", &["strict mode flags", "target & module", "paths for aliases", "include & exclude"]),
                node("TS with React", Core, "Type props, state, events, refs.", &["Typing component props", "useState & useRef types", "Typing event handlers", "Generic components"]),
                node("TS with Node.js", Opt, "Type Express routes, env vars.", &["@types/node, @types/express", "Typed request/response", "Env var typing", "Module augmentation"]),
                node("Declaration Files (.d.ts)", Opt, "Write types for untyped libraries.", &["declare module", "Ambient declarations", "DefinitelyTyped (@types/...)"]),
            ]),
        ],
        resources: &[
            res(Docs, "TypeScript Handbook", "typescriptlang.org"),
            res(Course, "Total TypeScript", "Matt Pocock · free exercises"),
            res(Video, "TypeScript — Fireship", "YouTube · 100 seconds + full course"),
        ],
    },
    RoadmapDef {
        id: "docker",
        icon: "🐳",
        title: "Docker",
        kind: Skill,
        difficulty: Beginner,
        duration: "2–3 wk",
        description: "Package and run apps in isolated containers — essential for every modern developer.",
        about: "Docker solves \"works on my machine\" by packaging apps and their dependencies into portable containers. Every developer and deployment pipeline uses it today.\n\nThis roadmap goes from installation to production-ready multi-container setups with Docker Compose.",
        prereqs: &["Basic Linux/terminal knowledge", "Understanding of what an application server does"],
        tags: &["Docker", "Dockerfile", "Docker Compose", "Volumes", "Networking", "Registries"],
        phases: &[
            phase("Docker Basics", &[
                node("Installation & Setup", Core, "Docker Desktop or Engine.", &["Docker Desktop (Mac/Win)", "Docker Engine (Linux)", "Post-install config", "Docker Hub account"]),
                node("Images & Containers", Core, "Core concepts.", &["What is an image?", "What is a container?", "docker run, ps, stop, rm", "docker images, pull, rmi", "Container lifecycle states"]),
                node("Writing Dockerfiles", Core, "Build images from scratch.", &["FROM, RUN, COPY, ADD", "WORKDIR, EXPOSE, CMD, ENTRYPOINT", "ENV & ARG", "Layer caching", "`.dockerignore` file"]),
                node("Multi-Stage Builds", Core, "Smaller production images.", &["FROM … AS builder", "COPY --from=builder", "Shrinking final image", "Separating build & runtime"]),
            ]),
            phase("Networking & Storage", &[
                node("Volumes", Core, "Persist data outside containers.", &["Named volumes", "Bind mounts (-v)", "tmpfs mounts", "Volume drivers"]),
                node("Networking", Core, "Container-to-container & host comms.", &["Bridge network (default)", "docker network create", "Container DNS", "Port mapping (-p)"]),
            ]),
            phase("Docker Compose & Production", &[
                node("Docker Compose", Core, "Multi-container apps as YAML.", &["services, volumes, networks", "depends_on & healthcheck", "`.env` files", "docker compose up/down/logs/ps"]),
                node("Compose for Dev", Core, "Hot-reload, databases, tooling.", &["Bind mounts for live reload", "DB services (Postgres, Redis, Mongo)", "Override files", "Profiles for optional services"]),
                node("Registries & Security", Core, "Push images & secure them.", &["docker login, push, pull", "Tagging strategy", "GHCR & AWS ECR", "Non-root user", "Trivy image scanning"]),
            ]),
        ],
        resources: &[
            res(Docs, "Docker Official Docs", "docs.docker.com"),
            res(Video, "TechWorld with Nana", "YouTube · Docker for beginners"),
            res(Course, "Docker Mastery — Udemy", "Bret Fisher · most popular course"),
            res(Article, "Play with Docker", "labs.play-with-docker.com"),
        ],
    },
    RoadmapDef {
        id: "git",
        icon: "🌿",
        title: "Git & GitHub",
        kind: Skill,
        difficulty: Beginner,
        duration: "1–2 wk",
        description: "Version control every dev must master — commits, branches, rebasing, collaboration.",
        about: "Git is the world's most used version control system. Every team uses it. This roadmap goes from first commit to advanced workflows like interactive rebasing, hooks, and large-team collaboration patterns.",
        prereqs: &["Terminal/command line basics"],
        tags: &["Git", "GitHub", "Branching", "Rebasing", "Hooks", "Pull Requests", "CI/CD"],
        phases: &[
            phase("Git Basics", &[
                node("Core Concepts", Core, "Repos, commits, staging area.", &["git init & clone", "Working tree vs index vs HEAD", "git add, commit, status, log", ".gitignore patterns"]),
                node("Branching", Core, "Create, switch, merge branches.", &["git branch, checkout, switch", "Fast-forward vs 3-way merge", "Merge conflicts", "git branch -d cleanup"]),
                node("Remotes", Core, "Push, pull, fetch with GitHub.", &["git remote add origin", "git push, pull, fetch", "Tracking branches", "Shallow clones (--depth)"]),
            ]),
            phase("Intermediate Git", &[
                node("Rebasing", Core, "Linear history, interactive rebase.", &["git rebase vs merge", "Interactive rebase (-i)", "Squashing commits", "Rebase onto another branch", "When NOT to rebase (public branches)"]),
                node("Stashing", Core, "Save work-in-progress temporarily.", &["git stash push/pop/list", "Stash with message", "apply vs pop", "Stash specific files (--pathspec)"]),
                node("Undoing Changes", Core, "reset, revert, restore — know the difference.", &["git restore (discard unstaged)", "reset --soft/mixed/hard", "git revert (safe undo)", "git reflog (recover lost commits)"]),
                node("Git Hooks", Opt, "Automate tasks on commit/push.", &["pre-commit hooks", "commit-msg validation", "Husky (JS projects)", "lint-staged"]),
            ]),
            phase("GitHub Collaboration", &[
                node("Pull Requests", Core, "Propose, review, merge.", &["Fork & PR workflow", "PR templates", "Code review etiquette", "Resolving review comments", "Draft PRs"]),
                node("GitHub Actions", Opt, "CI/CD directly from GitHub.", &["Workflow YAML basics", "on: push/pull_request", "Jobs, steps, runners", "Using marketplace actions"]),
                node("GitHub Features", Opt, "Issues, Projects, Discussions, Releases.", &["GitHub Issues & labels", "GitHub Projects (kanban)", "Releases & tags", "GitHub Codespaces"]),
            ]),
        ],
        resources: &[
            res(Article, "Pro Git (free book)", "git-scm.com/book"),
            res(Video, "Git Crash Course", "Traversy Media · YouTube"),
            res(Article, "Oh Shit, Git!?!", "ohshitgit.com · common mistakes"),
            res(Course, "Learn Git Branching", "learngitbranching.js.org · interactive"),
        ],
    },
    RoadmapDef {
        id: "sql",
        icon: "🗄️",
        title: "SQL & Databases",
        kind: Skill,
        difficulty: Beginner,
        duration: "3–5 wk",
        description: "Write powerful queries, design schemas, and understand relational databases deeply.",
        about: "SQL is the lingua franca of data. Whether you're a frontend dev, backend engineer, data analyst, or ML practitioner — understanding SQL is indispensable. This roadmap covers writing queries, designing schemas, and optimising performance.",
        prereqs: &["Basic programming logic", "Ability to think in tables/spreadsheets"],
        tags: &["SQL", "PostgreSQL", "MySQL", "Indexes", "Transactions", "Query Optimisation", "Schema Design"],
        phases: &[
            phase("SQL Fundamentals", &[
                node("Core Queries", Core, "SELECT, INSERT, UPDATE, DELETE.", &["SELECT with WHERE, ORDER BY, LIMIT", "INSERT INTO", "UPDATE with WHERE", "DELETE with WHERE", "DISTINCT & aliases"]),
                node("Filtering & Functions", Core, "Conditions, aggregations, string/date functions.", &["AND, OR, NOT, IN, BETWEEN, LIKE", "COUNT, SUM, AVG, MIN, MAX", "GROUP BY & HAVING", "String functions (CONCAT, UPPER, TRIM)", "Date functions (NOW, EXTRACT, DATE_TRUNC)"]),
                node("Joins", Core, "Combine data across tables.", &["INNER JOIN", "LEFT / RIGHT JOIN", "FULL OUTER JOIN", "CROSS JOIN", "Self-join", "Join on multiple conditions"]),
                node("Subqueries & CTEs", Core, "Nested queries and WITH clauses.", &["Subquery in WHERE", "Subquery in FROM", "Correlated subqueries", "WITH (CTE) syntax", "Recursive CTEs"]),
            ]),
            phase("Schema Design", &[
                node("Data Types", Core, "Choosing the right type for each column.", &["INTEGER, BIGINT, NUMERIC", "VARCHAR, TEXT", "BOOLEAN", "DATE, TIMESTAMP, TIMESTAMPTZ", "UUID vs SERIAL"]),
                node("Constraints", Core, "Primary keys, foreign keys, unique, not null.", &["PRIMARY KEY", "FOREIGN KEY & CASCADE", "UNIQUE & NOT NULL", "CHECK constraints", "DEFAULT values"]),
                node("Normalisation", Core, "1NF → 3NF — reduce data redundancy.", &["1NF: atomic values", "2NF: remove partial deps", "3NF: remove transitive deps", "When to denormalise", "Practical schema patterns"]),
                node("Indexing", Core, "Speed up reads without slowing writes too much.", &["B-tree index basics", "Composite indexes", "Partial indexes", "EXPLAIN ANALYZE", "Index maintenance costs"]),
            ]),
            phase("Advanced SQL", &[
                node("Window Functions", Core, "ROW_NUMBER, RANK, LAG, LEAD, running totals.", &["OVER (PARTITION BY … ORDER BY)", "ROW_NUMBER & RANK", "LAG & LEAD", "Running SUM / AVG", "NTILE"]),
                node("Transactions & ACID", Core, "Atomicity, consistency, isolation, durability.", &["BEGIN / COMMIT / ROLLBACK", "Isolation levels", "Deadlocks & prevention", "Savepoints"]),
                node("Query Optimisation", Core, "Understand and fix slow queries.", &["EXPLAIN ANALYZE", "Seq scan vs index scan", "Vacuum & analyse", "Connection pooling (PgBouncer)"]),
                node("PostgreSQL-Specific", Opt, "JSONB, full-text search, extensions.", &["JSONB operators", "Full-text search (tsvector)", "pg_trgm similarity", "pgvector for embeddings"]),
            ]),
        ],
        resources: &[
            res(Course, "SQLZoo", "sqlzoo.net · free interactive exercises"),
            res(Course, "Mode Analytics SQL Tutorial", "mode.com · practical SQL"),
            res(Docs, "PostgreSQL Documentation", "postgresql.org · full reference"),
            res(Book, "Learning SQL", "Alan Beaulieu · O'Reilly"),
        ],
    },
    RoadmapDef {
        id: "ui-ux",
        icon: "🎨",
        title: "UI / UX Design",
        kind: Skill,
        difficulty: Beginner,
        duration: "3–5 mo",
        description: "Design beautiful, usable interfaces — from wireframes to Figma prototypes.",
        about: "UI/UX design is the art of building interfaces people love. You'll learn visual design principles, user research methods, Figma fluency, and how to build design systems.\n\nMany developers who learn design become far more effective full-stack contributors.",
        prereqs: &["No prior design experience needed", "Curiosity about why some apps feel great"],
        tags: &["Figma", "Typography", "Color Theory", "UX Research", "Design Systems", "Prototyping", "Accessibility"],
        phases: &[
            phase("Visual Design", &[
                node("Typography", Core, "Typefaces, hierarchy, readability, pairing.", &["Font anatomy (baseline, x-height)", "Serif vs sans-serif", "Typographic scale", "Line height & letter spacing", "Font pairing techniques"]),
                node("Colour Theory", Core, "Hue, saturation, contrast, colour systems.", &["Colour wheel & relationships", "HSL vs RGB vs HEX", "WCAG contrast ratios", "Building a colour palette", "Dark mode token systems"]),
                node("Layout & Composition", Core, "Grid systems, spacing, visual hierarchy.", &["8-point grid system", "Column grids", "Whitespace as design tool", "Visual weight & balance", "Z/F-pattern reading"]),
                node("Gestalt Principles", Core, "How the brain perceives visual groups.", &["Proximity & similarity", "Continuity & closure", "Figure/ground", "Common fate"]),
            ]),
            phase("UX Fundamentals", &[
                node("User Research", Core, "Interviews, surveys, usability testing.", &["User interview techniques", "Survey design", "Usability testing methods", "Card sorting & tree testing", "Affinity mapping"]),
                node("Information Architecture", Core, "Navigation, content structure, site maps.", &["Site map creation", "User flows", "Navigation patterns", "Progressive disclosure"]),
                node("Heuristic Evaluation", Opt, "Nielsen's 10 usability heuristics.", &["Visibility of system status", "User control & freedom", "Error prevention", "Recognition over recall"]),
            ]),
            phase("Figma", &[
                node("Figma Basics", Core, "Frames, layers, shapes, text, styles.", &["Canvas navigation", "Frames vs groups", "Vector tools", "Colour & text styles", "Grids & guides"]),
                node("Auto Layout", Core, "Responsive components with auto layout.", &["Horizontal & vertical layout", "Padding & gap", "Fill/hug/fixed sizing", "Nested auto layout"]),
                node("Components & Variants", Core, "Reusable, scalable UI components.", &["Component creation & naming", "Boolean, text, nested props", "Variant groups", "Instances & overrides"]),
                node("Prototyping", Core, "Interactive flows and presentations.", &["Frame connections", "Smart animate", "Overlay & scroll", "Prototype flows", "Presentation mode"]),
                node("Design Systems & Tokens", Opt, "Systematic, scalable design language.", &["Foundation tokens", "Core components", "Figma Variables", "Handoff to devs (Dev Mode)"]),
            ]),
        ],
        resources: &[
            res(Course, "Google UX Design Certificate", "Coursera · beginner path"),
            res(Video, "DesignCourse — YouTube", "UI/UX, Figma tutorials"),
            res(Article, "Nielsen Norman Group", "nngroup.com · UX research"),
            res(Book, "Don't Make Me Think", "Steve Krug · classic usability"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_node_counts() {
        let roadmaps = builtin_roadmaps();
        let counts: Vec<_> = roadmaps
            .iter()
            .map(|r| (r.id.as_str(), r.node_count()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("frontend", 33),
                ("backend", 24),
                ("devops", 18),
                ("fullstack", 11),
                ("ai-ml", 22),
                ("cybersecurity", 13),
                ("mobile", 13),
                ("typescript", 13),
                ("docker", 9),
                ("git", 10),
                ("sql", 12),
                ("ui-ux", 12),
            ]
        );
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 190);
    }

    #[test]
    fn test_every_node_has_sub_items() {
        for roadmap in builtin_roadmaps() {
            for phase in &roadmap.phases {
                for node in &phase.nodes {
                    assert!(!node.subs.is_empty(), "{}: {}", roadmap.id, node.name);
                }
            }
        }
    }
}
