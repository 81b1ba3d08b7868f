/*
 * Responsibility
 * - POS リソースの保存先 (プロセス内メモリ)
 * - 永続化は扱わない。handler からは repo 単位で呼ぶ
 */
pub mod backup_repo;
pub mod customer_repo;
pub mod feedback_repo;
pub mod settings_repo;

use backup_repo::BackupRepo;
use customer_repo::CustomerRepo;
use feedback_repo::FeedbackRepo;
use settings_repo::SettingsRepo;

/// Clone は cheap (内部は Arc)
#[derive(Clone, Debug, Default)]
pub struct Repos {
    pub customers: CustomerRepo,
    pub feedback: FeedbackRepo,
    pub backups: BackupRepo,
    pub settings: SettingsRepo,
}
