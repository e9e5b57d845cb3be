//! Static descriptive content for the informational pages.

/// A template engine feature shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub key: &'static str,
    pub description: &'static str,
}

/// One advantage card on the advantages page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advantage {
    pub title: &'static str,
    pub description: &'static str,
    /// Syntax sample shown verbatim (escaped on render).
    pub example: &'static str,
}

/// Pros and cons of another template engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry {
    pub engine: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub(crate) static FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        key: "herencia",
        description: "Sistema de herencia de plantillas con blocks",
    },
    FeatureDescriptor {
        key: "filtros",
        description: "Más de 50 filtros incorporados para transformar datos",
    },
    FeatureDescriptor {
        key: "macros",
        description: "Funciones reutilizables dentro de las plantillas",
    },
    FeatureDescriptor {
        key: "expresiones",
        description: "Expresiones Python completas en las plantillas",
    },
    FeatureDescriptor {
        key: "autoescapado",
        description: "Protección automática contra XSS",
    },
    FeatureDescriptor {
        key: "extensiones",
        description: "Sistema de extensiones personalizable",
    },
];

pub(crate) static ADVANTAGES: [Advantage; 6] = [
    Advantage {
        title: "Sintaxis Clara y Pythónica",
        description: "Jinja2 usa una sintaxis similar a Python, lo que facilita el aprendizaje para desarrolladores Python.",
        example: "{{ variable | upper }} o {% for item in items %}",
    },
    Advantage {
        title: "Herencia de Plantillas",
        description: "Sistema robusto de herencia que permite crear layouts base y extenderlos.",
        example: "{% extends \"base.html\" %} y {% block content %}",
    },
    Advantage {
        title: "Filtros Potentes",
        description: "Más de 50 filtros integrados para transformar datos sin lógica en Python.",
        example: "{{ precio | round(2) }} o {{ texto | truncate(100) }}",
    },
    Advantage {
        title: "Macros Reutilizables",
        description: "Define funciones en plantillas para reutilizar código HTML.",
        example: "{% macro render_card(producto) %}",
    },
    Advantage {
        title: "Auto-escapado",
        description: "Protección automática contra ataques XSS escapando HTML por defecto.",
        example: "Seguridad integrada sin configuración adicional",
    },
    Advantage {
        title: "Expresiones Python",
        description: "Permite usar expresiones Python completas en las plantillas.",
        example: "{{ productos | length }} o {{ precio * 1.21 }}",
    },
];

pub(crate) static COMPARISON: [ComparisonEntry; 3] = [
    ComparisonEntry {
        engine: "EJS",
        pros: &["Sintaxis similar a JavaScript", "Fácil para devs de Node.js"],
        cons: &["Sin herencia de plantillas nativa", "Menos filtros integrados"],
    },
    ComparisonEntry {
        engine: "Handlebars",
        pros: &["Lógica-less (sin lógica compleja)", "Muy portable"],
        cons: &[
            "Limitado para casos complejos",
            "Requiere helpers para operaciones simples",
        ],
    },
    ComparisonEntry {
        engine: "Pug",
        pros: &["Sintaxis muy concisa", "Menos código HTML"],
        cons: &[
            "Curva de aprendizaje alta",
            "Indentación estricta puede ser problemática",
        ],
    },
];
