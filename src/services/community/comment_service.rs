//! 댓글 서비스 (스레드형)
//!
//! 댓글은 `parent_id` 로 트리를 이룹니다. 목록은 최상위 댓글마다 `replies` 를
//! 재귀적으로 채워 돌려주고, 삭제는 답글 서브트리 전체를 지웁니다.

use std::collections::{HashMap, HashSet, VecDeque};

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::community::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};
use crate::domain::entities::community::Comment;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::community::{CommentRepository, PostRepository};
use crate::repositories::parse_object_id;

#[derive(Clone)]
pub struct CommentService {
    comments: CommentRepository,
    posts: PostRepository,
}

impl CommentService {
    pub fn new(comments: CommentRepository, posts: PostRepository) -> Self {
        Self { comments, posts }
    }

    /// 게시글의 댓글 트리
    pub async fn list_for_post(&self, post_id: &str) -> AppResult<Vec<CommentResponse>> {
        let post_id = parse_object_id(post_id)?;
        self.ensure_post_exists(&post_id).await?;

        let comments = self.comments.list_for_post(&post_id).await?;
        Ok(build_comment_tree(comments))
    }

    pub async fn create(
        &self,
        author: &AuthenticatedUser,
        post_id: &str,
        request: CreateCommentRequest,
    ) -> AppResult<CommentResponse> {
        let post_id = parse_object_id(post_id)?;
        self.ensure_post_exists(&post_id).await?;

        let parent_id = match request.parent_id.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let parent_id = parse_object_id(raw)?;
                let parent = self.find(&parent_id).await?;
                if parent.post_id != post_id {
                    return Err(AppError::ValidationError(
                        "다른 게시글의 댓글에는 답글을 달 수 없습니다".to_string(),
                    ));
                }
                Some(parent_id)
            }
            None => None,
        };

        let comment = Comment::new(post_id, author.object_id()?, parent_id, request.content);
        let created = self.comments.create(comment).await?;

        Ok(CommentResponse::from(created))
    }

    /// 댓글 하나와 그 아래 답글 트리
    pub async fn get(&self, id: &str) -> AppResult<CommentResponse> {
        let id = parse_object_id(id)?;
        let comment = self.find(&id).await?;

        let siblings = self.comments.list_for_post(&comment.post_id).await?;
        let mut by_parent = group_by_parent(siblings);

        let mut response = CommentResponse::from(comment);
        response.replies = take_replies(Some(id), &mut by_parent);
        Ok(response)
    }

    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdateCommentRequest,
    ) -> AppResult<CommentResponse> {
        let id = parse_object_id(id)?;
        let comment = self.find(&id).await?;
        actor.ensure_can_modify(&comment.author_id)?;

        let updated = self
            .comments
            .update_content(&id, &request.content)
            .await?
            .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))?;

        Ok(CommentResponse::from(updated))
    }

    /// 댓글과 모든 하위 답글 삭제
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;
        let comment = self.find(&id).await?;
        actor.ensure_can_modify(&comment.author_id)?;

        let thread = self.comments.list_for_post(&comment.post_id).await?;
        let subtree = collect_subtree(id, &thread);
        let removed = self.comments.delete_many(&subtree).await?;

        log::info!("댓글 삭제: id={}, 답글 포함 {}개", id, removed);
        Ok(())
    }

    async fn find(&self, id: &ObjectId) -> AppResult<Comment> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))
    }

    async fn ensure_post_exists(&self, post_id: &ObjectId) -> AppResult<()> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("게시글을 찾을 수 없습니다".to_string())),
        }
    }
}

/// 오래된 순으로 정렬된 댓글 목록을 최상위 댓글 트리로 변환
///
/// 부모가 목록에 없는 답글은 트리에 나타나지 않는다.
pub fn build_comment_tree(comments: Vec<Comment>) -> Vec<CommentResponse> {
    let mut by_parent = group_by_parent(comments);
    take_replies(None, &mut by_parent)
}

fn group_by_parent(comments: Vec<Comment>) -> HashMap<Option<ObjectId>, Vec<Comment>> {
    let mut by_parent: HashMap<Option<ObjectId>, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_parent.entry(comment.parent_id).or_default().push(comment);
    }
    by_parent
}

/// `parent` 아래 답글 트리를 만든다
///
/// 스택으로 깊이 우선 순회하므로 답글 깊이가 호출 스택을 늘리지 않는다.
/// 꺼낸 그룹은 맵에서 사라지므로 순환이 있어도 끝난다.
fn take_replies(
    parent: Option<ObjectId>,
    by_parent: &mut HashMap<Option<ObjectId>, Vec<Comment>>,
) -> Vec<CommentResponse> {
    let mut top = by_parent.remove(&parent).unwrap_or_default().into_iter();
    let mut stack: Vec<(CommentResponse, std::vec::IntoIter<Comment>)> = Vec::new();
    let mut finished = Vec::new();

    loop {
        let next = match stack.last_mut() {
            Some((_, children)) => children.next(),
            None => top.next(),
        };

        match next {
            Some(comment) => {
                let children = comment
                    .id
                    .and_then(|id| by_parent.remove(&Some(id)))
                    .unwrap_or_default();
                stack.push((CommentResponse::from(comment), children.into_iter()));
            }
            None => match stack.pop() {
                Some((done, _)) => match stack.last_mut() {
                    Some((owner, _)) => owner.replies.push(done),
                    None => finished.push(done),
                },
                None => break,
            },
        }
    }

    finished
}

/// `root` 와 그 아래 모든 답글의 ID (루트 포함)
pub fn collect_subtree(root: ObjectId, comments: &[Comment]) -> Vec<ObjectId> {
    let mut children: HashMap<ObjectId, Vec<ObjectId>> = HashMap::new();
    for comment in comments {
        if let (Some(parent), Some(id)) = (comment.parent_id, comment.id) {
            children.entry(parent).or_default().push(id);
        }
    }

    let mut seen = HashSet::from([root]);
    let mut subtree = vec![root];
    let mut queue = VecDeque::from([root]);

    while let Some(parent) = queue.pop_front() {
        for &id in children.get(&parent).into_iter().flatten() {
            if seen.insert(id) {
                subtree.push(id);
                queue.push_back(id);
            }
        }
    }

    subtree
}
