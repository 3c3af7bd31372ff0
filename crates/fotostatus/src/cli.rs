use std::path::PathBuf;

use base::entities::{OrderNumber, ShopId};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fotostatus",
    version,
    about = "Verfolgt den Status von Fotoaufträgen"
)]
pub struct Cli {
    /// Datei, in der die Aufträge gespeichert werden.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Gibt die Stati der abgespeicherten Aufträge in einer Tabelle aus.
    /// Mit SHOP und ORDER wird nur dieser Auftrag abgefragt und nichts gespeichert.
    Status {
        #[arg(requires = "order")]
        shop: Option<ShopId>,
        order: Option<OrderNumber>,
    },
    /// Fügt einen Fotoauftrag hinzu.
    Add {
        /// Filiale, in der der Auftrag abgegeben wurde.
        shop: ShopId,
        /// Auftragsnummer.
        order: OrderNumber,
        /// Name, unter dem der Auftrag wiedererkannt wird.
        name: Option<String>,
    },
    /// Löscht einen Fotoauftrag.
    Remove {
        /// Name des Auftrags, oder die Auftragsnummer wenn er keinen Namen hat.
        name: String,
    },
    /// Löscht Aufträge, die bereits geliefert wurden (Status DELIVERED).
    Cleanup,
}
