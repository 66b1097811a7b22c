// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use cb_core::protocol::NewComment;

use crate::api::BoardApi;
use crate::display::short_id;
use crate::error::Result;
use crate::session::BoardSession;

use super::resolve_id;

pub async fn run<A>(
    session: &mut BoardSession<A>,
    id: &str,
    new: NewComment,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    new.validate()?;
    session.load().await?;
    let id = resolve_id(session.board(), id)?;

    let comment = session.add_comment(&id, new).await?;
    writeln!(
        out,
        "Commented on {} as {}",
        short_id(&id),
        comment.author
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::api::test_helpers::{make_note, Call};
    use crate::commands::testing::{loaded_session, output};
    use crate::error::Error;

    #[tokio::test]
    async fn comment_is_appended_on_server_and_board() {
        let note = make_note("sort mail", 5);
        let id = note.id.clone();
        let (api, mut session) = loaded_session(vec![note]).await;
        let mut buf = Vec::new();

        run(
            &mut session,
            &id[..8],
            NewComment::new(Some("Lee".into()), " nice "),
            &mut buf,
        )
        .await
        .unwrap();

        assert_eq!(output(buf), format!("Commented on {} as Lee\n", &id[..8]));
        assert_eq!(api.notes()[0].comments[0].text, "nice");
        assert_eq!(session.board().get(&id).unwrap().comments.len(), 1);
    }

    #[tokio::test]
    async fn missing_author_is_anonymous() {
        let note = make_note("sort mail", 5);
        let id = note.id.clone();
        let (_api, mut session) = loaded_session(vec![note]).await;
        let mut buf = Vec::new();

        run(&mut session, &id, NewComment::new(None, "ok"), &mut buf)
            .await
            .unwrap();

        assert!(output(buf).ends_with("as Anonymous\n"));
    }

    #[tokio::test]
    async fn blank_text_is_rejected_before_any_request() {
        let note = make_note("sort mail", 5);
        let id = note.id.clone();
        let (api, mut session) = loaded_session(vec![note]).await;
        let mut buf = Vec::new();

        let err = run(&mut session, &id, NewComment::new(None, "  "), &mut buf)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::FieldRequired { .. }));
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn note_deleted_elsewhere_is_not_found() {
        let note = make_note("sort mail", 5);
        let id = note.id.clone();
        let (api, mut session) = loaded_session(vec![note]).await;
        api.remove(&id);
        let mut buf = Vec::new();

        let err = run(&mut session, &id, NewComment::new(None, "hi"), &mut buf)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NoteNotFound(_)));
    }
}
