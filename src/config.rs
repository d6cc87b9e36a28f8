//! Configuración y argumentos CLI

use crate::languages::canonical_code;

/// Qué hacer con una forma que la validación no puede rellenar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Error con la primera forma sin valor
    Strict,
    /// Se registra un aviso y la carga continúa
    #[default]
    Lenient,
}

/// Opciones que usa la biblioteca al validar y renderizar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub validation: ValidationPolicy,
    /// Marcadores `<Entity>`/`<Entities>` para entidades dinámicas ausentes
    pub label_debug: bool,
    /// Escapar HTML en todas las referencias
    pub escape_html: bool,
    /// Una entidad ausente fuera del modo depuración es un error
    pub strict_rendering: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Idioma a usar (default: "en")
    pub language: String,
    /// Archivo de términos
    pub dictionary_file: Option<String>,
    /// Archivo de etiquetas
    pub labels_file: Option<String>,
    /// Plantilla a renderizar (argumento posicional)
    pub template: Option<String>,
    /// Pedir el plural de los sustantivos de la plantilla
    pub plural: bool,
    pub validation: ValidationPolicy,
    /// Modo depuración de etiquetas
    pub label_debug: bool,
    /// Versión de etiquetas para las sustituciones por versión
    pub label_version: Option<f64>,
    pub escape_html: bool,
    /// Imprimir el JSON de la etiqueta en lugar del texto
    pub export_json: bool,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            dictionary_file: None,
            labels_file: None,
            template: None,
            plural: false,
            validation: ValidationPolicy::default(),
            label_debug: false,
            label_version: None,
            escape_html: false,
            export_json: false,
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-l" | "--lang" => {
                    config.language = args_iter.next().ok_or("--lang requiere un valor")?;
                }
                "-d" | "--dict" => {
                    config.dictionary_file =
                        Some(args_iter.next().ok_or("--dict requiere un valor")?);
                }
                "-f" | "--labels" => {
                    config.labels_file =
                        Some(args_iter.next().ok_or("--labels requiere un valor")?);
                }
                "-p" | "--plural" => config.plural = true,
                "--strict" => config.validation = ValidationPolicy::Strict,
                "--debug" => config.label_debug = true,
                "--escape-html" => config.escape_html = true,
                "--json" => config.export_json = true,
                "--version-label" => {
                    let value = args_iter
                        .next()
                        .ok_or("--version-label requiere un valor")?;
                    let version = value
                        .parse::<f64>()
                        .map_err(|_| format!("Versión no válida: {}", value))?;
                    config.label_version = Some(version);
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Opción desconocida: {}", arg));
                    }
                    // Argumento posicional = plantilla
                    config.template = Some(arg);
                }
            }
        }

        config.language = Self::canonicalize_language(&config.language);
        Ok(config)
    }

    fn canonicalize_language(language: &str) -> String {
        let normalized = language.trim().to_lowercase();
        match normalized.as_str() {
            "english" | "inglés" => "en".to_string(),
            "spanish" | "espanol" | "español" => "es".to_string(),
            "french" | "francés" => "fr".to_string(),
            "german" | "alemán" => "de".to_string(),
            _ => canonical_code(language),
        }
    }

    /// Opciones para la biblioteca; en modo estricto también se renderiza
    /// de forma estricta
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            validation: self.validation,
            label_debug: self.label_debug,
            escape_html: self.escape_html,
            strict_rendering: self.validation == ValidationPolicy::Strict,
        }
    }

    pub fn print_help() {
        println!(
            r#"Concordancia - Concordancia gramatical de etiquetas

USO:
    concordancia [OPCIONES] [PLANTILLA]

ARGUMENTOS:
    [PLANTILLA]    Plantilla a renderizar, p. ej. "<New/> <Account/>",
                   o sección.clave si se cargó un archivo de etiquetas

OPCIONES:
    -h, --help                  Muestra esta ayuda
    -l, --lang <IDIOMA>         Idioma o locale (default: en)
    -d, --dict <ARCHIVO>        Archivo de términos
    -f, --labels <ARCHIVO>      Archivo de etiquetas (label|sección|clave|plantilla)
    -p, --plural                Pide el plural de los sustantivos
    --strict                    Validación y renderizado estrictos
    --debug                     Marcadores para entidades ausentes
    --version-label <N>         Versión de etiquetas (p. ej. 150)
    --escape-html               Escapa HTML en las referencias
    --json                      Imprime el JSON de la etiqueta

EJEMPLOS:
    concordancia --lang fr --dict terms.txt "<New/> <Account/>"
    concordancia --lang fr_CA --dict terms.txt --plural "<New/> <Account/>"
    concordancia --lang en --dict terms.txt --json "<a/> <Account/>"
    concordancia --lang de --dict terms.txt --labels labels.txt page.title"#
        );
    }
}
