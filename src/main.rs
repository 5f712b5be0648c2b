use std::io::{self, Write};
use std::sync::Arc;

use onboarding_domain::{LanguageLevel, ProductType};
use onboarding_workflow::stubs::InMemoryRegistrationApi;
use onboarding_workflow::{FlowKind, OnboardingFactory, OnboardingSession, SessionView, WorkflowConfig};
use tracing_subscriber::EnvFilter;
use wizard::{Advance, Notification, Notifier, SubmitOutcome};

/// Notificador de consola: imprime cada aviso al momento.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, n: Notification) {
        let mark = if n.is_destructive() { "!!" } else { "ok" };
        println!("[{}] {}: {}", mark, n.title, n.description);
    }
}

/// Menú interactivo para recorrer un flujo de alta contra el backend en
/// memoria.
///
/// Opciones soportadas:
/// 1) Ver borrador
/// 2) Editar campo
/// 3) Productos (añadir / editar / quitar)
/// 4) Siguiente paso
/// 5) Paso anterior
/// 6) Enviar
/// 7) Cambiar de flujo
/// 8) Salir
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_env("ONBOARDING_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = WorkflowConfig::from_env()?;
    let api = Arc::new(InMemoryRegistrationApi::new());
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let mut session = open_session(&config, &api, &notifier).await?;

    loop {
        println!("\n== Onboarding CLI ({}) ==", session.kind());
        match session.view() {
            SessionView::Step { current, total } => println!("Paso {} de {}", current, total),
            SessionView::Submitting => println!("Enviando..."),
            SessionView::PendingReview { status_path } => println!("Pendiente de revisión -> {}", status_path),
        }
        println!("1) Ver borrador");
        println!("2) Editar campo");
        println!("3) Productos");
        println!("4) Siguiente paso");
        println!("5) Paso anterior");
        println!("6) Enviar");
        println!("7) Cambiar de flujo");
        println!("8) Salir");
        let choice = prompt("Elige una opción: ")?;
        match choice.trim() {
            "1" => print_draft(&session)?,
            "2" => {
                let name = prompt("Campo: ")?;
                let value = prompt("Valor: ")?;
                if let Err(e) = session.set_input(name.trim(), value.trim_end_matches(|c: char| c == '\r' || c == '\n')) {
                    eprintln!("Error: {}", e);
                }
            }
            "3" => products_menu(&mut session)?,
            "4" => {
                if let Advance::Moved { from, to } = session.next() {
                    println!("Paso {} -> {}", from, to);
                }
            }
            "5" => {
                let step = session.prev();
                println!("Paso actual: {}", step);
            }
            "6" => match session.submit().await {
                SubmitOutcome::Submitted(receipt) => println!("Enviado; estado en {}", receipt.status_path),
                SubmitOutcome::NotFinalStep => println!("Sólo se puede enviar desde el último paso"),
                SubmitOutcome::Ignored => println!("Envío ignorado"),
                SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) => {}
            },
            "7" => session = open_session(&config, &api, &notifier).await?,
            "8" => {
                println!("Saliendo...");
                break;
            }
            other => println!("Opción inválida: {}", other),
        }
    }

    Ok(())
}

async fn open_session(config: &WorkflowConfig,
                      api: &Arc<InMemoryRegistrationApi>,
                      notifier: &Arc<dyn Notifier>)
                      -> anyhow::Result<OnboardingSession> {
    loop {
        println!("\nFlujos disponibles:");
        for (i, kind) in FlowKind::ALL.iter().enumerate() {
            println!("{}) {}", i + 1, kind);
        }
        let choice = prompt("Elige un flujo: ")?;
        let kind = match choice.trim().parse::<usize>() {
            Ok(n) if (1..=FlowKind::ALL.len()).contains(&n) => FlowKind::ALL[n - 1],
            _ => match choice.trim().parse::<FlowKind>() {
                Ok(k) => k,
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
        };
        let session = if kind.is_edit() {
            OnboardingFactory::load(kind, config, api.clone(), notifier.clone()).await
        } else {
            OnboardingFactory::create(kind, config, api.clone(), notifier.clone())
        };
        match session {
            Ok(s) => return Ok(s),
            Err(e) => eprintln!("No se pudo abrir el flujo: {}", e),
        }
    }
}

fn print_draft(session: &OnboardingSession) -> anyhow::Result<()> {
    println!("\nCAMPO                          | VALOR");
    println!("-----------------------------------------------------------");
    for (name, value) in session.draft().fields() {
        println!("{:<30} | {}", name, value);
    }
    for (i, p) in session.draft().products().iter().enumerate() {
        println!("producto {}: {}", i, serde_json::to_string(p)?);
    }
    if session.kind() == FlowKind::VisitorRegistration || session.kind() == FlowKind::VisitorEdit {
        let levels: Vec<&str> = LanguageLevel::ALL.iter().map(|l| l.key()).collect();
        println!("language_level: {}", levels.join(" | "));
    }
    Ok(())
}

fn products_menu(session: &mut OnboardingSession) -> anyhow::Result<()> {
    if !session.draft().schema().has_products {
        println!("Este flujo no tiene productos");
        return Ok(());
    }
    let types: Vec<String> = ProductType::ALL.iter().map(|t| format!("{} ({})", t.key(), t.label())).collect();
    println!("a) Añadir  e) Editar  q) Quitar");
    let action = prompt("Acción: ")?;
    let result = match action.trim() {
        "a" => session.add_product().map(|i| println!("Producto {} añadido", i)),
        "e" => {
            let index = match prompt("Índice: ")?.trim().parse::<usize>() {
                Ok(i) => i,
                Err(_) => {
                    eprintln!("Índice inválido");
                    return Ok(());
                }
            };
            println!("Tipos: {}", types.join(", "));
            let field = prompt("Campo del producto: ")?;
            let value = prompt("Valor: ")?;
            let field = field.trim();
            let value = value.trim();
            if field == "needs_export_license" {
                let flag = matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "y" | "بله");
                session.update_product(index, field, flag)
            } else {
                session.update_product(index, field, value)
            }
        }
        "q" => match prompt("Índice: ")?.trim().parse::<usize>() {
            Ok(i) => session.remove_product(i).map(|p| println!("Producto '{}' quitado", p.product_name)),
            Err(_) => {
                eprintln!("Índice inválido");
                return Ok(());
            }
        },
        other => {
            println!("Acción inválida: {}", other);
            Ok(())
        }
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    Ok(())
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s)
}
