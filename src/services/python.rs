use std::env;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

// Pont vers les collaborateurs Python (scoreur + entraîneur). Une invocation
// par appel, pas de pool, pas de retry : les prédictions concurrentes sont
// indépendantes et non coordonnées.

const SCORE_SCRIPT: &str = "predict_from_json.py";
const TRAIN_SCRIPT: &str = "train_model.py";
const DEFAULT_TIMEOUT_SECS: u64 = 600;

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("script not found at {0}")]
    ScriptNotFound(PathBuf),

    #[error("process timed out after {0:?}")]
    Timeout(Duration),

    #[error("process exited with status {status}")]
    Failed {
        status: i32,
        stdout: String,
        stderr: String,
    },

    #[error("failed to spawn process: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON on stdout: {0}")]
    Decode(#[from] serde_json::Error),
}

// Sortie capturée d'un processus terminé avec succès.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCapture {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct PythonRunner {
    python_path: String,
    scripts_dir: PathBuf,
    timeout: Duration,
}

impl PythonRunner {
    pub fn new(python_path: String, scripts_dir: PathBuf, timeout: Duration) -> Self {
        Self {
            python_path,
            scripts_dir,
            timeout,
        }
    }

    /// Configuration via .env : PYTHON_PATH, SCRIPTS_DIR, PYTHON_TIMEOUT_SECS.
    pub fn from_env() -> Self {
        let python_path = env::var("PYTHON_PATH").unwrap_or_else(|_| "python3".to_string());
        let scripts_dir = env::var("SCRIPTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("scripts/python"));
        let timeout = env::var("PYTHON_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(python_path, scripts_dir, Duration::from_secs(timeout))
    }

    /// Envoie le JSON de features au scoreur sur stdin et décode son stdout.
    /// Le schéma de sortie appartient au modèle : la valeur décodée est
    /// retournée telle quelle.
    pub async fn score(&self, features_json: String) -> Result<serde_json::Value, CollaboratorError> {
        let script = self.scripts_dir.join(SCORE_SCRIPT);
        if !script.exists() {
            return Err(CollaboratorError::ScriptNotFound(script));
        }

        let capture = run_with_timeout(
            &self.python_path,
            &[script.as_os_str().to_string_lossy().to_string()],
            None,
            Some(features_json),
            self.timeout,
        )
        .await?;

        Ok(serde_json::from_str(&capture.stdout)?)
    }

    /// Lance l'entraîneur dans le répertoire des scripts (le modèle .pkl est
    /// sauvegardé à côté du script). Succès = code de sortie 0.
    pub async fn retrain(&self) -> Result<ProcessCapture, CollaboratorError> {
        let script = self.scripts_dir.join(TRAIN_SCRIPT);
        if !script.exists() {
            return Err(CollaboratorError::ScriptNotFound(script));
        }

        run_with_timeout(
            &self.python_path,
            &[script.as_os_str().to_string_lossy().to_string()],
            Some(&self.scripts_dir),
            None,
            self.timeout,
        )
        .await
    }
}

/// Exécute un processus avec entrée optionnelle sur stdin et un plafond
/// wall-clock dur. Au dépassement, le futur est abandonné et kill_on_drop
/// termine le processus (SIGKILL) : jamais de requête qui pend, jamais de
/// processus orphelin.
pub async fn run_with_timeout(
    program: &str,
    args: &[String],
    workdir: Option<&Path>,
    stdin_data: Option<String>,
    timeout: Duration,
) -> Result<ProcessCapture, CollaboratorError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn()?;
    let stdin = child.stdin.take();

    // L'écriture sur stdin peut bloquer dès que la charge dépasse le tampon
    // du pipe : elle doit vivre sous le même plafond que l'attente du
    // processus. Au dépassement, le futur (propriétaire du child) est
    // abandonné et kill_on_drop termine le processus.
    let wait = async move {
        if let Some(mut stdin) = stdin {
            if let Some(data) = stdin_data {
                stdin.write_all(data.as_bytes()).await?;
            }
            // drop ferme le pipe : le script voit EOF et peut lire tout son stdin
            drop(stdin);
        }
        child.wait_with_output().await
    };

    let output = tokio::time::timeout(timeout, wait)
        .await
        .map_err(|_| CollaboratorError::Timeout(timeout))??;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(CollaboratorError::Failed {
            status: output.status.code().unwrap_or(1),
            stdout,
            stderr,
        });
    }

    Ok(ProcessCapture { stdout, stderr })
}
