// src/engine/progression.rs

use log::{debug, info};

use crate::domain::matches::{BracketSlot, Match, MatchStatus, PlayerSide};
use crate::domain::score::{BestOf, MatchScore};
use crate::domain::EntrantId;
use crate::domain::tournament::TournamentFormat;
use crate::engine::errors::EngineError;
use crate::engine::events::{ProgressionEventKind, ProgressionLog};
use crate::engine::state::BracketState;
use crate::scoring::resolve;

/// Результат записи результата / авто-продвижения.
#[derive(Debug)]
pub struct RecordOutcome {
    /// Матч, над которым выполнялась операция (после изменения).
    pub updated: Match,
    /// Созданный или дополненный матч следующего раунда (если было продвижение).
    pub advanced: Option<Match>,
    /// Завершился ли турнир этой операцией.
    pub tournament_complete: bool,
    /// Что произошло – для нотификаций/фронта.
    pub events: ProgressionLog,
}

/// Шаг заранее просчитанного плана продвижения.
///
/// План целиком считается на неизменённом состоянии (включая проверку
/// конфликтов слотов) и только потом применяется: либо операция проходит
/// полностью, либо состояние не трогается вообще.
enum PlannedStep {
    /// Поставить победителя в сторону целевого матча
    /// (create = матч ещё не существует и будет создан лениво).
    Place {
        from: BracketSlot,
        to: BracketSlot,
        side: PlayerSide,
        entrant: EntrantId,
        create: bool,
    },
    /// Целевой матч остался односторонним, а парный фидер никогда не
    /// появится – авторазрешение как bye, каскад продолжается дальше.
    AutoResolve {
        slot: BracketSlot,
        entrant: EntrantId,
    },
}

/// Записать результат матча и продвинуть сетку.
///
/// Частичный счёт (победитель ещё не набрал нужных сетов) переводит матч
/// в InProgress без продвижения. Полный – завершает матч, обновляет или
/// лениво создаёт матч следующего раунда и, если это был финал,
/// объявляет турнир завершённым.
///
/// Повторная запись по завершённому матчу всегда падает AlreadyCompleted –
/// это защита от двойного продвижения сетки.
pub fn record_result(
    state: &mut BracketState,
    slot: BracketSlot,
    score: MatchScore,
) -> Result<RecordOutcome, EngineError> {
    // --- фаза проверок: состояние не меняем ---
    let current = state
        .match_at(slot)
        .ok_or(EngineError::MatchNotFound { slot })?;

    match current.status {
        MatchStatus::Completed => {
            return Err(EngineError::AlreadyCompleted {
                match_id: current.id,
            })
        }
        MatchStatus::Canceled => {
            return Err(EngineError::MatchCanceled {
                match_id: current.id,
            })
        }
        MatchStatus::Scheduled | MatchStatus::InProgress => {}
    }

    let (player_a, player_b) = match (current.player_a, current.player_b) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            return Err(EngineError::PlayersNotAssigned {
                match_id: current.id,
                slot,
            })
        }
    };

    validate_score(&score, state.best_of)?;
    let resolution = resolve(&score, state.best_of);

    let mut events = ProgressionLog::new();

    let Some(winner_side) = resolution.winner else {
        // Частичный счёт: сохраняем, матч идёт дальше, сетку не двигаем.
        let Some(m) = state.match_at_mut(slot) else {
            return Err(EngineError::Internal("match disappeared during commit"));
        };
        m.score = Some(score);
        m.status = MatchStatus::InProgress;
        let updated = m.clone();

        events.push(ProgressionEventKind::ScoreRecorded {
            match_id: updated.id,
            slot,
            sets_a: resolution.sets_a,
            sets_b: resolution.sets_b,
        });

        return Ok(RecordOutcome {
            updated,
            advanced: None,
            tournament_complete: false,
            events,
        });
    };

    let winner = match winner_side {
        PlayerSide::A => player_a,
        PlayerSide::B => player_b,
    };

    // План продвижения считается до первой мутации: SlotConflict
    // обязан вылететь раньше, чем мы что-либо записали.
    let steps = match state.format {
        TournamentFormat::SingleElimination => plan_advancement(state, slot, winner)?,
        TournamentFormat::RoundRobin => Vec::new(),
    };

    // --- фаза применения: дальше ошибок быть не может ---
    let match_id;
    {
        let Some(m) = state.match_at_mut(slot) else {
            return Err(EngineError::Internal("match disappeared during commit"));
        };
        m.score = Some(score);
        m.winner = Some(winner);
        m.status = MatchStatus::Completed;
        match_id = m.id;
    }

    events.push(ProgressionEventKind::MatchCompleted {
        match_id,
        slot,
        winner,
    });
    debug!(
        "tournament {}: match {} at {} completed, winner {}",
        state.tournament_id, match_id, slot, winner
    );

    let advanced = apply_steps(state, &steps, &mut events);
    finish_outcome(state, slot, advanced, events)
}

/// Авторазрешить односторонний матч (bye): единственный игрок объявляется
/// победителем без счёта, продвижение – как у обычного результата.
pub fn advance_on_bye(
    state: &mut BracketState,
    slot: BracketSlot,
) -> Result<RecordOutcome, EngineError> {
    let current = state
        .match_at(slot)
        .ok_or(EngineError::MatchNotFound { slot })?;

    match current.status {
        MatchStatus::Completed => {
            return Err(EngineError::AlreadyCompleted {
                match_id: current.id,
            })
        }
        MatchStatus::Canceled => {
            return Err(EngineError::MatchCanceled {
                match_id: current.id,
            })
        }
        MatchStatus::Scheduled | MatchStatus::InProgress => {}
    }

    let Some(winner) = current.sole_player() else {
        if current.player_count() == 0 {
            return Err(EngineError::PlayersNotAssigned {
                match_id: current.id,
                slot,
            });
        }
        return Err(EngineError::Internal(
            "advance_on_bye called on a two-player match",
        ));
    };

    let steps = match state.format {
        TournamentFormat::SingleElimination => plan_advancement(state, slot, winner)?,
        TournamentFormat::RoundRobin => Vec::new(),
    };

    let match_id;
    {
        let Some(m) = state.match_at_mut(slot) else {
            return Err(EngineError::Internal("match disappeared during commit"));
        };
        m.winner = Some(winner);
        m.status = MatchStatus::Completed;
        m.bye = true;
        match_id = m.id;
    }

    let mut events = ProgressionLog::new();
    events.push(ProgressionEventKind::ByeResolved {
        match_id,
        slot,
        winner,
    });

    let advanced = apply_steps(state, &steps, &mut events);
    finish_outcome(state, slot, advanced, events)
}

/// Продвинуть победителей всех bye-матчей первого раунда.
///
/// Вызывается один раз после генерации сетки; повторный вызов безопасен –
/// уже продвинутый победитель пропускается, а не ставится второй раз.
pub fn propagate_initial_byes(state: &mut BracketState) -> Result<ProgressionLog, EngineError> {
    let mut events = ProgressionLog::new();

    if state.format != TournamentFormat::SingleElimination {
        return Ok(events);
    }

    let byes: Vec<(BracketSlot, EntrantId)> = state
        .matches_in_round(1)
        .filter(|m| m.bye && m.status == MatchStatus::Completed)
        .filter_map(|m| m.winner.map(|w| (m.slot, w)))
        .collect();

    for (slot, winner) in byes {
        let steps = plan_advancement(state, slot, winner)?;
        apply_steps(state, &steps, &mut events);
    }

    Ok(events)
}

fn finish_outcome(
    state: &mut BracketState,
    slot: BracketSlot,
    advanced: Option<Match>,
    mut events: ProgressionLog,
) -> Result<RecordOutcome, EngineError> {
    let updated = state
        .match_at(slot)
        .cloned()
        .ok_or(EngineError::Internal("match disappeared during commit"))?;

    let tournament_complete = state.is_complete();
    if tournament_complete {
        events.push(ProgressionEventKind::TournamentCompleted {
            tournament_id: state.tournament_id,
            champion: state.champion(),
        });
        info!(
            "tournament {} complete, champion {:?}",
            state.tournament_id,
            state.champion()
        );
    }

    Ok(RecordOutcome {
        updated,
        advanced,
        tournament_complete,
        events,
    })
}

fn validate_score(score: &MatchScore, best_of: BestOf) -> Result<(), EngineError> {
    if score.sets.len() > best_of.max_sets() {
        return Err(EngineError::InvalidScore {
            reason: format!(
                "{} sets entered, format allows at most {}",
                score.sets.len(),
                best_of.max_sets()
            ),
        });
    }
    Ok(())
}

/// Просчитать всю цепочку продвижения победителя из `from_slot`
/// на неизменённом состоянии.
///
/// Правила:
///   - цель = (round + 1, slot / 2); чётный фидер → player_a, нечётный → player_b;
///   - существующий целевой матч дополняется, отсутствующий создаётся;
///   - чужой игрок на целевой стороне → SlotConflict (ничего не применяем);
///   - тот же игрок на целевой стороне → продвигать нечего (идемпотентность);
///   - если целевой матч остаётся односторонним, а парный фидер лежит за
///     пределами слотов своего раунда (никогда не сыграет) – авторазрешение
///     как bye и каскад в следующий раунд.
fn plan_advancement(
    state: &BracketState,
    from_slot: BracketSlot,
    winner: EntrantId,
) -> Result<Vec<PlannedStep>, EngineError> {
    let mut steps = Vec::new();
    let mut cur_slot = from_slot;
    let entrant = winner;

    loop {
        if state.is_terminal_round(cur_slot.round) {
            // Финал: продвигать больше некуда.
            break;
        }

        let target = cur_slot.next_round_slot();
        let side = cur_slot.feeder_side();
        let sibling_feeds = cur_slot.sibling().slot < state.slots_in_round(cur_slot.round);

        match state.match_at(target) {
            Some(m) => {
                if let Some(occupant) = m.player(side) {
                    if occupant != entrant {
                        return Err(EngineError::SlotConflict {
                            slot: target,
                            occupant,
                            incoming: entrant,
                        });
                    }
                    // Этот победитель уже стоит на месте.
                    break;
                }

                steps.push(PlannedStep::Place {
                    from: cur_slot,
                    to: target,
                    side,
                    entrant,
                    create: false,
                });

                if m.player(side.other()).is_some() || sibling_feeds {
                    break;
                }

                steps.push(PlannedStep::AutoResolve {
                    slot: target,
                    entrant,
                });
                cur_slot = target;
            }
            None => {
                steps.push(PlannedStep::Place {
                    from: cur_slot,
                    to: target,
                    side,
                    entrant,
                    create: true,
                });

                if sibling_feeds {
                    break;
                }

                steps.push(PlannedStep::AutoResolve {
                    slot: target,
                    entrant,
                });
                cur_slot = target;
            }
        }
    }

    Ok(steps)
}

/// Применить заранее просчитанный план. Ошибок здесь быть не может:
/// все проверки уже сделаны в plan_advancement.
fn apply_steps(
    state: &mut BracketState,
    steps: &[PlannedStep],
    events: &mut ProgressionLog,
) -> Option<Match> {
    let mut advanced_slot: Option<BracketSlot> = None;

    for step in steps {
        match *step {
            PlannedStep::Place {
                from,
                to,
                side,
                entrant,
                create,
            } => {
                if create {
                    let id = state.insert_partial(to, side, entrant);
                    events.push(ProgressionEventKind::MatchCreated { match_id: id, slot: to });
                } else if let Some(m) = state.match_at_mut(to) {
                    m.set_player(side, entrant);
                }

                events.push(ProgressionEventKind::WinnerAdvanced {
                    entrant,
                    from,
                    to,
                    side,
                });
                debug!(
                    "tournament {}: entrant {} advanced {} -> {} ({:?})",
                    state.tournament_id, entrant, from, to, side
                );

                if advanced_slot.is_none() {
                    advanced_slot = Some(to);
                }
            }
            PlannedStep::AutoResolve { slot, entrant } => {
                if let Some(m) = state.match_at_mut(slot) {
                    m.winner = Some(entrant);
                    m.status = MatchStatus::Completed;
                    m.bye = true;
                    events.push(ProgressionEventKind::ByeResolved {
                        match_id: m.id,
                        slot,
                        winner: entrant,
                    });
                }
            }
        }
    }

    advanced_slot.and_then(|s| state.match_at(s).cloned())
}
