mod code;
mod suggestion;

pub use code::Code;
pub use suggestion::Suggestion;

use hangar::HangarProblem;
use ph_client::ProductHuntClientError;

use crate::adapter::AdapterProblem;

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// How to get past the error
    pub suggestion: Option<Suggestion>,
    /// The stable code of the error
    pub code: Option<Code>,
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for Metadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(problem) = error.downcast_ref::<AdapterProblem>() {
            let (suggestion, code) = match problem {
                AdapterProblem::InputFormat { .. } => {
                    (Some(Suggestion::ProvideJsonArray), Some(Code::E001))
                }
                AdapterProblem::Validation { .. } => {
                    (Some(Suggestion::ProvideValidProperties), Some(Code::E002))
                }
                AdapterProblem::CredentialMissing { connection } => (
                    Some(Suggestion::SetToken {
                        connection: connection.clone(),
                    }),
                    Some(Code::E003),
                ),
                AdapterProblem::RemoteCall(client_error) => {
                    (remote_call_suggestion(client_error), Some(Code::E004))
                }
                AdapterProblem::Unexpected { source, .. } => {
                    let suggestion = match source.downcast_ref::<HangarProblem>() {
                        Some(HangarProblem::InvalidConnectionsFile { path, .. }) => {
                            Suggestion::FixConnectionsFile(path.clone())
                        }
                        _ => Suggestion::SubmitIssue,
                    };
                    (Some(suggestion), Some(Code::E005))
                }
            };
            return Metadata { suggestion, code };
        }

        Metadata::default()
    }
}

fn remote_call_suggestion(error: &ProductHuntClientError) -> Option<Suggestion> {
    match error {
        ProductHuntClientError::InvalidCredentials { .. } => Some(Suggestion::CheckToken),
        ProductHuntClientError::SendRequest(http_error)
            if http_error.is_connect() || http_error.is_timeout() =>
        {
            Some(Suggestion::CheckServerConnection)
        }
        _ => None,
    }
}
