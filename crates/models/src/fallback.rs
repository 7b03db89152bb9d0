//! Bundled records served when the backend cannot be reached.
//!
//! Built once per process so every fallback response is identical.

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;

use crate::{Profile, Project};

const PLACEHOLDER_PROJECT_IMAGE: &str = "/placeholder-project.jpg";
const PLACEHOLDER_PROFILE_IMAGE: &str = "/placeholder-profile.jpg";

static BUILT_AT: Lazy<String> = Lazy::new(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        project(
            1,
            "E-commerce Platform",
            "Una plataforma de comercio electrónico completa desarrollada con React y Node.js, que incluye gestión de productos, carrito de compras y sistema de pagos.",
            Some("https://github.com/MTDEV2312/ecommerce-platform"),
            Some("https://ecommerce-demo.example.com"),
            r#"["React", "Node.js", "MongoDB", "Stripe"]"#,
        ),
        project(
            2,
            "Task Management App",
            "Aplicación de gestión de tareas con funcionalidades de colaboración en tiempo real, notificaciones y seguimiento de progreso.",
            Some("https://github.com/MTDEV2312/task-manager"),
            Some("https://taskmanager-demo.example.com"),
            r#"["Vue.js", "Express", "Socket.io", "PostgreSQL"]"#,
        ),
        project(
            3,
            "Weather Dashboard",
            "Dashboard meteorológico interactivo que muestra pronósticos en tiempo real con gráficos dinámicos y alertas personalizadas.",
            Some("https://github.com/MTDEV2312/weather-dashboard"),
            None,
            r#"["JavaScript", "Chart.js", "OpenWeather API"]"#,
        ),
        project(
            4,
            "Portfolio Website",
            "Sitio web de portafolio personal desarrollado con Astro y Tailwind CSS, optimizado para rendimiento y accesibilidad.",
            Some("https://github.com/MTDEV2312/portfolio"),
            Some("https://mathiasteran.dev"),
            r#"["Astro", "Tailwind CSS", "TypeScript"]"#,
        ),
    ]
});

static PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    id: 1,
    name: "Mathias Teran".into(),
    image_url: PLACEHOLDER_PROFILE_IMAGE.into(),
    about_me: "Soy un desarrollador FullStack apasionado por crear soluciones web innovadoras y eficientes. Me especializo en el desarrollo tanto del frontend como del backend, utilizando las tecnologías más actuales del mercado.".into(),
    contact_email: "contacto@mathiasteran.dev".into(),
    created_at: BUILT_AT.clone(),
    updated_at: BUILT_AT.clone(),
});

fn project(
    id: i64,
    title: &str,
    description: &str,
    github_link: Option<&str>,
    live_demo_link: Option<&str>,
    tech: &str,
) -> Project {
    Project {
        id,
        image_src: PLACEHOLDER_PROJECT_IMAGE.into(),
        title: title.into(),
        description: description.into(),
        github_link: github_link.map(Into::into),
        live_demo_link: live_demo_link.map(Into::into),
        tech_section: Some(tech.into()),
        created_at: BUILT_AT.clone(),
        updated_at: BUILT_AT.clone(),
    }
}

pub fn fallback_projects() -> Vec<Project> {
    PROJECTS.clone()
}

pub fn fallback_profile() -> Profile {
    PROFILE.clone()
}
