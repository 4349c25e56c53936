// Static page content. Edit here to re-skin the portfolio.

pub const SITE_TITLE: &str = "AI/ML Developer";

pub const SCENE_URL: &str = "https://prod.spline.design/wwTRdG1D9CkNs368/scene.splinecode";

pub const HERO_HEADLINE: &str = "Building intelligent experiences in 3D";
pub const HERO_BLURB: &str = "I\u{2019}m an AI/ML developer specializing in interactive, performant web experiences. Explore neural-inspired visuals, data-driven projects, and immersive interactions.";

pub const ABOUT_BLURB: &str = "I create AI-first products, blending machine learning, data visualization, and 3D to craft delightful, accessible interfaces. My focus areas include generative models, real-time inference pipelines, and intuitive human-in-the-loop tooling.";

pub const ABOUT_POINTS: &[&str] = &[
    "Neural networks & LLMs",
    "Real-time data viz",
    "Edge + cloud inference",
    "Accessible interactions",
];

/// Labels for the rotating sphere, most important first (LOD keeps a prefix).
pub const SKILLS: &[&str] = &[
    "Python",
    "PyTorch",
    "TensorFlow",
    "JAX",
    "Transformers",
    "LLMs",
    "RAG",
    "Vector DBs",
    "Scikit-learn",
    "NumPy",
    "Pandas",
    "FastAPI",
    "Docker",
    "Kubernetes",
    "Airflow",
    "Postgres",
    "Redis",
    "WebGL",
    "Three.js",
    "TypeScript",
    "React",
    "Next.js",
    "Tailwind",
    "D3",
];

/// Labels for the orbit ring under the about blurb.
pub const RING_SKILLS: &[&str] = &[
    "Python",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "NLP",
    "Computer Vision",
    "MLOps",
    "Docker",
    "Kubernetes",
    "FastAPI",
    "Pandas",
    "NumPy",
    "XGBoost",
    "LLMs",
    "Transformers",
    "LangChain",
    "RAG",
    "Vector DBs",
    "Data Viz",
    "Time Series",
];

pub struct Project {
    pub title: &'static str,
    pub tags: &'static [&'static str],
    pub desc: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Neural Style Transfer Studio",
        tags: &["PyTorch", "WebGL", "Workers"],
        desc: "Interactive, GPU-accelerated style transfer with real-time previews and batching.",
    },
    Project {
        title: "LLM-Powered Code Assistant",
        tags: &["Transformers", "RAG", "TypeScript"],
        desc: "Context-aware code suggestions with embeddings, chunking, and secure tools.",
    },
    Project {
        title: "Anomaly Detection Dashboard",
        tags: &["Time Series", "scikit-learn", "D3"],
        desc: "Streaming analytics with multivariate models and actionable alerting.",
    },
    Project {
        title: "Vision Pose Tracker",
        tags: &["ONNX", "WebAssembly", "WebRTC"],
        desc: "Low-latency, in-browser pose tracking with model LOD and quantization.",
    },
];

pub const PROJECT_DETAILS: &[&str] = &[
    "Optimized LOD: dynamically reduces shader complexity on low-power devices.",
    "Texture compression: webp sprites and reduced normal map sizes.",
    "Keyboard accessible: hit Enter/Space to toggle details.",
];

pub const CONTACT_BLURB: &str = "I partner with startups and teams to ship AI-enabled products: \
prototyping, model evaluation, deployment, and delightful UX for complex systems.";

pub const CONTACT_PITCH: &[&str] = &[
    "Rapid prototyping with notebooks-to-production workflows",
    "MLOps: monitoring, evals, drift detection",
    "Web performance: LOD, code-splitting, lazy loading",
];
